use std::collections::BTreeSet;

use crate::automaton::{Automaton, StateId};

impl Automaton {
    /// Tells if the automaton accepts no word at all. An automaton without
    /// initial or without final states accepts nothing.
    pub fn is_language_empty(&self) -> bool {
        assert!(self.is_valid(), "Automaton must be valid");

        if !self.initial_states().is_disjoint(self.final_states()) {
            return false;
        }

        if self.initial_states().is_empty() || self.final_states().is_empty() {
            return true;
        }

        !self
            .dfs(self.initial_states().iter().copied(), true)
            .found_final
    }

    pub fn has_empty_intersection_with(&self, other: &Automaton) -> bool {
        self.intersect(other).is_language_empty()
    }

    /// Tells if every word accepted by self is accepted by other.
    ///
    /// Symbols only known to self are added to a copy of other before it is
    /// complemented, so that words using them end up in the complement.
    pub fn is_included_in(&self, other: &Automaton) -> bool {
        assert!(self.is_valid(), "Self must be valid");
        assert!(other.is_valid(), "Other must be valid");

        let mut extended = other.clone();
        for symbol in self.alphabet() {
            extended.add_symbol(*symbol);
        }

        self.has_empty_intersection_with(&extended.complement())
    }

    pub fn is_equivalent_to(&self, other: &Automaton) -> bool {
        self.is_included_in(other) && other.is_included_in(self)
    }

    /// Removes every state that can not be reached from an initial state.
    ///
    /// If no state is reachable the lowest state is kept, so the automaton
    /// stays valid.
    pub fn remove_non_accessible_states(&mut self) {
        assert!(self.is_valid(), "Automaton must be valid");

        let mut keep = self
            .dfs(self.initial_states().iter().copied(), false)
            .visited;

        if keep.is_empty() {
            keep = self.states().into_iter().take(1).collect::<BTreeSet<StateId>>();
        }

        let before = self.count_states();

        for state in self.states() {
            if !keep.contains(&state) {
                self.remove_state(state);
            }
        }

        tracing::debug!(
            "Removed {} non accessible states",
            before - self.count_states()
        );
    }

    /// Removes every state from which no final state can be reached.
    pub fn remove_non_co_accessible_states(&mut self) {
        let mut mirror = self.mirror();
        mirror.remove_non_accessible_states();

        *self = mirror.mirror();
    }
}
