use std::collections::BTreeSet;

use itertools::Itertools;
use petgraph::visit::Dfs;

use crate::automaton::{Automaton, EPSILON, Label, StateId};

/// The result of a depth-first exploration, see [`Automaton::dfs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsOutcome {
    /// All states visited before the exploration finished or was aborted.
    pub visited: BTreeSet<StateId>,
    /// Whether a final state was visited.
    pub found_final: bool,
}

impl Automaton {
    /// Computes the set of states reachable from any state in `origin` by
    /// exactly one transition with the given label.
    pub fn make_transition(
        &self,
        origin: &BTreeSet<StateId>,
        label: impl Into<Label>,
    ) -> BTreeSet<StateId> {
        let label = label.into();

        origin
            .iter()
            .flat_map(|state| self.targets(*state, label))
            .collect()
    }

    /// Calculates the epsilon closure of a set of states.
    /// Meaning all states reachable only by epsilon transitions.
    pub fn epsilon_closure(&self, states: &BTreeSet<StateId>) -> BTreeSet<StateId> {
        let mut closure = states.clone();
        let mut stack = states.iter().copied().collect_vec();

        while let Some(state) = stack.pop() {
            for target in self.targets(state, EPSILON) {
                if closure.insert(target) {
                    stack.push(target);
                }
            }
        }

        closure
    }

    /// Reads `word` starting from the initial states and returns the set of
    /// states the automaton can be in afterwards. Epsilon transitions are
    /// followed before the first and after every letter.
    pub fn read_string(&self, word: &str) -> BTreeSet<StateId> {
        let mut current = self.epsilon_closure(self.initial_states());

        for letter in word.chars() {
            if current.is_empty() {
                break;
            }

            current = self.epsilon_closure(&self.make_transition(&current, letter));
        }

        current
    }

    /// Tells if `word` is part of the language of the automaton.
    pub fn matches(&self, word: &str) -> bool {
        !self.read_string(word).is_disjoint(self.final_states())
    }

    /// Explores the automaton depth-first from every state in `starts`,
    /// following all transitions including epsilon ones. The visited set is
    /// shared between the starts.
    ///
    /// With `stop_at_final` the exploration is aborted as soon as a final state
    /// is visited, which is all emptiness checks need.
    pub fn dfs(&self, starts: impl IntoIterator<Item = StateId>, stop_at_final: bool) -> DfsOutcome {
        let mut dfs = Dfs::empty(&self.graph);
        let mut visited = BTreeSet::new();
        let mut found_final = false;

        for start in starts {
            if !self.has_state(start) {
                continue;
            }

            dfs.move_to(start);

            while let Some(state) = dfs.next(&self.graph) {
                visited.insert(state);

                if self.is_state_final(state) {
                    found_final = true;

                    if stop_at_final {
                        return DfsOutcome {
                            visited,
                            found_final,
                        };
                    }
                }
            }
        }

        DfsOutcome {
            visited,
            found_final,
        }
    }
}
