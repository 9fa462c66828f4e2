use std::iter;

use hashbrown::HashMap;
use itertools::Itertools;

use crate::automaton::{Automaton, Label, StateId};

/// The algorithms available to [`Automaton::minimize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinimizationAlgorithm {
    #[default]
    Moore,
    Brzozowski,
}

/// Represents the table used in the Moore minimization of a complete
/// deterministic automaton. Each entry is a state of the automaton, whether it
/// is initial or final, and its successors. The successors are stored by
/// alphabet position, so `transitions[i]` is the target on the i-th symbol in
/// ascending order.
#[derive(Debug, Clone)]
pub struct MooreTable<'a> {
    pub automaton: &'a Automaton,
    pub entries: Vec<MooreTableEntry>,
    /// The current class of every state. Classes are numbered from 1.
    pub classes: HashMap<StateId, StateId>,
}

impl<'a> MooreTable<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        assert!(
            automaton.is_deterministic() && automaton.is_complete(),
            "Automaton must be deterministic and complete to build a Moore table"
        );

        let mut entries = vec![];

        for state in automaton.states() {
            let mut entry = MooreTableEntry::new(
                state,
                automaton.is_state_initial(state),
                automaton.is_state_final(state),
            );

            for symbol in automaton.alphabet() {
                for target in automaton.targets(state, Label::Symbol(*symbol)) {
                    entry.add_transition(target);
                }
            }

            entries.push(entry);
        }

        let classes = entries
            .iter()
            .map(|entry| (entry.state, if entry.is_final { 2 } else { 1 }))
            .collect();

        MooreTable {
            automaton,
            entries,
            classes,
        }
    }

    /// Refines the classes until they no longer change.
    pub fn minimize(&mut self) {
        for entry in &self.entries {
            assert_eq!(
                entry.transitions.len(),
                self.automaton.count_symbols(),
                "All entries must have transitions for all symbols in the alphabet. Entry: {:?}",
                entry
            );
        }

        let mut round = 0;

        loop {
            round += 1;

            let refined = self.refine();

            tracing::debug!(
                "Moore round {}: {} classes",
                round,
                refined.values().unique().count()
            );

            if refined == self.classes {
                break;
            }

            self.classes = refined;
        }
    }

    /// One refinement round. The signature of a state is its current class
    /// followed by the classes of its successors. States are visited in
    /// ascending order and every new signature gets the next class number.
    fn refine(&self) -> HashMap<StateId, StateId> {
        let mut signatures: HashMap<Vec<StateId>, StateId> = HashMap::new();
        let mut refined = HashMap::new();

        for entry in &self.entries {
            let signature = iter::once(self.classes[&entry.state])
                .chain(entry.transitions.iter().map(|target| self.classes[target]))
                .collect_vec();

            let next_class = signatures.len() as StateId + 1;
            let class = *signatures.entry(signature).or_insert(next_class);

            refined.insert(entry.state, class);
        }

        refined
    }

    /// Builds the quotient automaton, with one state per class named after
    /// the class number.
    pub fn to_automaton(&self) -> Automaton {
        let mut minimal = Automaton::new();

        for symbol in self.automaton.alphabet() {
            minimal.add_symbol(*symbol);
        }

        for entry in &self.entries {
            let class = self.classes[&entry.state];

            minimal.add_state(class);
            if entry.is_initial {
                minimal.set_state_initial(class);
            }
            if entry.is_final {
                minimal.set_state_final(class);
            }
        }

        for entry in &self.entries {
            let from = self.classes[&entry.state];

            for (symbol, target) in self.automaton.alphabet().iter().zip(&entry.transitions) {
                minimal.add_transition(from, *symbol, self.classes[target]);
            }
        }

        minimal
    }
}

#[derive(Debug, Clone)]
pub struct MooreTableEntry {
    pub state: StateId,
    pub is_initial: bool,
    pub is_final: bool,
    pub transitions: Vec<StateId>,
}

impl MooreTableEntry {
    pub fn new(state: StateId, is_initial: bool, is_final: bool) -> Self {
        MooreTableEntry {
            state,
            is_initial,
            is_final,
            transitions: vec![],
        }
    }

    pub fn add_transition(&mut self, target: StateId) {
        self.transitions.push(target);
    }
}

impl Automaton {
    pub fn minimize(&self, algorithm: MinimizationAlgorithm) -> Automaton {
        match algorithm {
            MinimizationAlgorithm::Moore => self.minimize_moore(),
            MinimizationAlgorithm::Brzozowski => self.minimize_brzozowski(),
        }
    }

    /// Minimizes with Moore's partition refinement. Non-accessible states are
    /// removed and the automaton is completed and determinized before the
    /// refinement starts. States of the result are numbered from 1.
    pub fn minimize_moore(&self) -> Automaton {
        assert!(self.is_valid(), "Automaton must be valid to minimize");

        let mut accessible = self.clone();
        accessible.remove_non_accessible_states();

        let dfa = accessible.completed().determinize();
        debug_assert!(dfa.is_complete());

        let mut table = MooreTable::new(&dfa);
        table.minimize();

        table.to_automaton()
    }

    /// Minimizes with Brzozowski's double reversal.
    pub fn minimize_brzozowski(&self) -> Automaton {
        assert!(self.is_valid(), "Automaton must be valid to minimize");

        self.mirror()
            .subset_construction()
            .mirror()
            .subset_construction()
            .completed()
    }
}
