use std::collections::{BTreeSet, VecDeque};

use hashbrown::HashMap;
use itertools::Itertools;

use crate::{
    automaton::{Automaton, Label, StateId},
    utils::first_free_state,
};

/// Symbol given to constructed automata that would otherwise end up without
/// any symbol, so that they stay valid.
pub const FILLER_SYMBOL: char = 'a';

impl Automaton {
    /// Builds an automaton accepting no word over `alphabet`: a single
    /// initial, non-final state `0` looping on every symbol. The result is
    /// valid, deterministic and complete.
    pub fn empty_language(alphabet: &BTreeSet<char>) -> Automaton {
        let mut automaton = Automaton::new();

        for symbol in alphabet {
            automaton.add_symbol(*symbol);
        }
        if automaton.count_symbols() == 0 {
            automaton.add_symbol(FILLER_SYMBOL);
        }

        automaton.add_state(0);
        automaton.set_state_initial(0);

        for symbol in automaton.alphabet().clone() {
            automaton.add_transition(0, symbol, 0);
        }

        automaton
    }

    /// Creates the mirror automaton, accepting the reversed words.
    /// Initial and final states are swapped and every transition is reversed.
    pub fn mirror(&self) -> Automaton {
        assert!(self.is_valid(), "Automaton must be valid to mirror");

        let mut mirror = Automaton::new();

        for symbol in self.alphabet() {
            mirror.add_symbol(*symbol);
        }

        for state in self.states() {
            mirror.add_state(state);

            if self.is_state_final(state) {
                mirror.set_state_initial(state);
            }
            if self.is_state_initial(state) {
                mirror.set_state_final(state);
            }
        }

        for (from, label, to) in self.transitions() {
            mirror.add_transition(to, label, from);
        }

        mirror
    }

    /// Creates a complete automaton accepting the same language. If some
    /// transitions are missing, a dump state is added that loops on every
    /// symbol and receives all missing transitions.
    pub fn completed(&self) -> Automaton {
        let mut complete = self.clone();

        if self.is_complete() {
            return complete;
        }

        let dump = first_free_state(&complete);
        complete.add_state(dump);

        let states = complete.states();

        for symbol in self.alphabet() {
            let label = Label::Symbol(*symbol);

            for &state in &states {
                if complete.targets(state, label).next().is_none() {
                    complete.add_transition(state, label, dump);
                }
            }
        }

        tracing::debug!(
            "Completed automaton with dump state {} ({} transitions)",
            dump,
            complete.count_transitions()
        );

        complete
    }

    /// Creates an automaton accepting every word over the alphabet that is not
    /// accepted by self. The automaton is determinized and completed first, as
    /// swapping final states is only sound on complete deterministic automata.
    pub fn complement(&self) -> Automaton {
        let mut complement = if self.is_deterministic() {
            self.clone()
        } else {
            self.determinize()
        };

        if !complement.is_complete() {
            complement = complement.completed();
        }

        for state in complement.states() {
            if complement.is_state_final(state) {
                complement.remove_final_state(state);
            } else {
                complement.set_state_final(state);
            }
        }

        complement
    }

    /// Builds the product automaton of self and other, accepting the words
    /// accepted by both. The alphabet is the set of shared symbols and only
    /// pairs of states reachable from pairs of initial states are built.
    pub fn intersect(&self, other: &Automaton) -> Automaton {
        assert!(self.is_valid(), "Self must be valid to intersect");
        assert!(other.is_valid(), "Other must be valid to intersect");

        if self.has_epsilon_transition() || other.has_epsilon_transition() {
            return self.without_epsilon().intersect(&other.without_epsilon());
        }

        let mut intersection = Automaton::new();

        for symbol in self.alphabet().intersection(other.alphabet()) {
            intersection.add_symbol(*symbol);
        }

        let alphabet = intersection.alphabet().clone();

        // state map to map pairs of states to the new intersected states
        let mut state_map: HashMap<(StateId, StateId), StateId> = HashMap::new();
        let mut queue = VecDeque::new();
        let mut next_state: StateId = 0;

        for &left in self.initial_states() {
            for &right in other.initial_states() {
                intersection.add_state(next_state);
                intersection.set_state_initial(next_state);
                state_map.insert((left, right), next_state);
                queue.push_back((left, right));
                next_state += 1;
            }
        }

        while let Some((left, right)) = queue.pop_front() {
            let state = state_map[&(left, right)];

            if self.is_state_final(left) && other.is_state_final(right) {
                intersection.set_state_final(state);
            }

            for symbol in &alphabet {
                let label = Label::Symbol(*symbol);
                let left_targets = self.targets(left, label).collect_vec();
                let right_targets = other.targets(right, label).collect_vec();

                for (&l, &r) in left_targets.iter().cartesian_product(&right_targets) {
                    let target = *state_map.entry((l, r)).or_insert_with(|| {
                        let new_state = next_state;
                        next_state += 1;
                        intersection.add_state(new_state);
                        queue.push_back((l, r));
                        new_state
                    });

                    intersection.add_transition(state, label, target);
                }
            }
        }

        if intersection.count_states() == 0 {
            intersection.add_state(0);
        }
        if intersection.count_symbols() == 0 {
            intersection.add_symbol(FILLER_SYMBOL);
        }

        tracing::debug!(
            "Intersection built with {} states and {} transitions",
            intersection.count_states(),
            intersection.count_transitions()
        );

        intersection
    }

    /// Creates a deterministic automaton accepting the same language. Returns
    /// a copy if self is already deterministic, see
    /// [`Automaton::subset_construction`] otherwise.
    pub fn determinize(&self) -> Automaton {
        assert!(self.is_valid(), "Automaton must be valid to determinize");

        if self.is_deterministic() {
            return self.clone();
        }

        self.subset_construction()
    }

    /// Determinizes self with the subset construction.
    /// Each state of the result stands for a set of states of self, starting
    /// with the epsilon closure of all initial states. A set is final iff it
    /// contains a final state. The empty set is kept as a regular state, so
    /// the result is always complete.
    ///
    /// Without initial states the language is empty and the result is
    /// [`Automaton::empty_language`].
    pub fn subset_construction(&self) -> Automaton {
        if self.initial_states().is_empty() {
            return Automaton::empty_language(self.alphabet());
        }

        let mut dfa = Automaton::new();

        for symbol in self.alphabet() {
            dfa.add_symbol(*symbol);
        }

        let mut state_map: HashMap<BTreeSet<StateId>, StateId> = HashMap::new();
        let mut queue = VecDeque::new();

        let start = self.epsilon_closure(self.initial_states());
        dfa.add_state(0);
        dfa.set_state_initial(0);
        state_map.insert(start.clone(), 0);
        queue.push_back(start);

        while let Some(subset) = queue.pop_front() {
            let state = state_map[&subset];

            if !subset.is_disjoint(self.final_states()) {
                dfa.set_state_final(state);
            }

            for symbol in self.alphabet() {
                let target = self.epsilon_closure(&self.make_transition(&subset, *symbol));

                let target_state = match state_map.get(&target) {
                    Some(&existing) => existing,
                    None => {
                        let new_state = state_map.len() as StateId;
                        dfa.add_state(new_state);
                        state_map.insert(target.clone(), new_state);
                        queue.push_back(target);
                        new_state
                    }
                };

                dfa.add_transition(state, *symbol, target_state);
            }
        }

        tracing::debug!(
            "Subset construction turned {} states into {}",
            self.count_states(),
            dfa.count_states()
        );

        dfa
    }

    /// Creates an equivalent automaton without epsilon transitions. Every state
    /// takes over the symbol transitions leaving its epsilon closure and is
    /// final if its closure contains a final state.
    pub fn without_epsilon(&self) -> Automaton {
        let mut result = Automaton::new();

        for symbol in self.alphabet() {
            result.add_symbol(*symbol);
        }

        for state in self.states() {
            result.add_state(state);

            if self.is_state_initial(state) {
                result.set_state_initial(state);
            }
        }

        for state in self.states() {
            let closure = self.epsilon_closure(&BTreeSet::from([state]));

            if !closure.is_disjoint(self.final_states()) {
                result.set_state_final(state);
            }

            for symbol in self.alphabet() {
                for target in self.make_transition(&closure, *symbol) {
                    result.add_transition(state, *symbol, target);
                }
            }
        }

        result
    }
}
