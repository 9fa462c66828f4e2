use std::{
    collections::BTreeSet,
    fmt::{Debug, Display},
};

use colored::Colorize;
use itertools::Itertools;
use petgraph::graphmap::DiGraphMap;

pub use label::{EPSILON, Label};

pub mod label;
pub mod language;
pub mod minimization;
pub mod simulation;
pub mod transform;

/// Identifier of a state. Only non-negative identifiers are accepted by
/// [`Automaton::add_state`].
pub type StateId = i32;

/// A finite automaton over an alphabet of characters. The automaton may be
/// non-deterministic, incomplete, have any number of initial and final states,
/// and contain epsilon transitions.
///
/// The transition relation is stored as a directed graph whose nodes are the
/// states. The weight of the edge between two states is the set of labels of
/// all transitions connecting them, so an edge exists iff that set is
/// non-empty.
#[derive(Clone, Default)]
pub struct Automaton {
    alphabet: BTreeSet<char>,
    initial: BTreeSet<StateId>,
    accepting: BTreeSet<StateId>,
    graph: DiGraphMap<StateId, BTreeSet<Label>>,
}

impl Automaton {
    /// Builds an empty automaton, with no symbol, no state and no transition.
    pub fn new() -> Self {
        Automaton::default()
    }

    /// An automaton is valid if it has at least one symbol and one state.
    pub fn is_valid(&self) -> bool {
        !self.alphabet.is_empty() && self.graph.node_count() > 0
    }

    pub fn add_symbol(&mut self, symbol: char) -> bool {
        if !symbol.is_ascii_graphic() {
            return false;
        }

        self.alphabet.insert(symbol)
    }

    /// Removes a symbol from the alphabet, together with every transition
    /// labelled with it.
    pub fn remove_symbol(&mut self, symbol: char) -> bool {
        if !self.alphabet.remove(&symbol) {
            return false;
        }

        let label = Label::Symbol(symbol);
        let mut emptied = vec![];

        for (from, to, labels) in self.graph.all_edges_mut() {
            labels.remove(&label);
            if labels.is_empty() {
                emptied.push((from, to));
            }
        }

        for (from, to) in emptied {
            self.graph.remove_edge(from, to);
        }

        true
    }

    pub fn has_symbol(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    pub fn count_symbols(&self) -> usize {
        self.alphabet.len()
    }

    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Adds a state. New states are neither initial nor final.
    pub fn add_state(&mut self, state: StateId) -> bool {
        if state < 0 || self.has_state(state) {
            return false;
        }

        self.graph.add_node(state);
        true
    }

    /// Removes a state, its initial and final marks and every transition it
    /// takes part in.
    pub fn remove_state(&mut self, state: StateId) -> bool {
        if !self.graph.remove_node(state) {
            return false;
        }

        self.initial.remove(&state);
        self.accepting.remove(&state);

        true
    }

    pub fn has_state(&self, state: StateId) -> bool {
        self.graph.contains_node(state)
    }

    pub fn count_states(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns all states in ascending order.
    pub fn states(&self) -> Vec<StateId> {
        self.graph.nodes().sorted().collect_vec()
    }

    pub fn set_state_initial(&mut self, state: StateId) {
        if self.has_state(state) {
            self.initial.insert(state);
        }
    }

    pub fn is_state_initial(&self, state: StateId) -> bool {
        self.initial.contains(&state)
    }

    pub fn remove_initial_state(&mut self, state: StateId) {
        self.initial.remove(&state);
    }

    pub fn initial_states(&self) -> &BTreeSet<StateId> {
        &self.initial
    }

    pub fn set_state_final(&mut self, state: StateId) {
        if self.has_state(state) {
            self.accepting.insert(state);
        }
    }

    pub fn is_state_final(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    pub fn remove_final_state(&mut self, state: StateId) {
        self.accepting.remove(&state);
    }

    pub fn final_states(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// Adds the transition `from --label--> to`.
    ///
    /// Fails if the transition already exists, if the label is a symbol that
    /// is not part of the alphabet, or if one of the states does not exist.
    pub fn add_transition(&mut self, from: StateId, label: impl Into<Label>, to: StateId) -> bool {
        let label = label.into();

        if let Label::Symbol(symbol) = label
            && !self.has_symbol(symbol)
        {
            return false;
        }

        if !self.has_state(from) || !self.has_state(to) {
            return false;
        }

        match self.graph.edge_weight_mut(from, to) {
            Some(labels) => labels.insert(label),
            None => {
                self.graph.add_edge(from, to, BTreeSet::from([label]));
                true
            }
        }
    }

    /// Removes the transition `from --label--> to`. Other transitions of the
    /// `(from, label)` group are left untouched.
    pub fn remove_transition(
        &mut self,
        from: StateId,
        label: impl Into<Label>,
        to: StateId,
    ) -> bool {
        let label = label.into();

        let Some(labels) = self.graph.edge_weight_mut(from, to) else {
            return false;
        };

        if !labels.remove(&label) {
            return false;
        }

        if labels.is_empty() {
            self.graph.remove_edge(from, to);
        }

        true
    }

    pub fn has_transition(&self, from: StateId, label: impl Into<Label>, to: StateId) -> bool {
        let label = label.into();

        self.graph
            .edge_weight(from, to)
            .is_some_and(|labels| labels.contains(&label))
    }

    /// Counts all transitions, epsilon transitions included.
    pub fn count_transitions(&self) -> usize {
        self.graph
            .all_edges()
            .map(|(_, _, labels)| labels.len())
            .sum()
    }

    /// Returns all transitions as `(from, label, to)` triples, ordered by
    /// source, label and destination.
    pub fn transitions(&self) -> Vec<(StateId, Label, StateId)> {
        self.graph
            .all_edges()
            .flat_map(|(from, to, labels)| labels.iter().map(move |label| (from, *label, to)))
            .sorted()
            .collect_vec()
    }

    /// Iterates over the destinations of the transitions leaving `from` with
    /// the given label.
    pub fn targets(&self, from: StateId, label: Label) -> impl Iterator<Item = StateId> + '_ {
        self.graph
            .edges(from)
            .filter(move |(_, _, labels)| labels.contains(&label))
            .map(|(_, to, _)| to)
    }

    pub fn has_epsilon_transition(&self) -> bool {
        self.graph
            .all_edges()
            .any(|(_, _, labels)| labels.contains(&EPSILON))
    }

    /// An automaton is deterministic if it has exactly one initial state, no
    /// epsilon transition and at most one destination per state and symbol.
    pub fn is_deterministic(&self) -> bool {
        assert!(self.is_valid(), "Automaton must be valid");

        if self.initial.len() != 1 || self.has_epsilon_transition() {
            return false;
        }

        self.graph.nodes().all(|state| {
            self.alphabet
                .iter()
                .all(|symbol| self.targets(state, Label::Symbol(*symbol)).nth(1).is_none())
        })
    }

    /// An automaton is complete if every state has at least one transition for
    /// every symbol of the alphabet.
    pub fn is_complete(&self) -> bool {
        assert!(self.is_valid(), "Automaton must be valid");

        self.graph.nodes().all(|state| {
            self.alphabet
                .iter()
                .all(|symbol| self.targets(state, Label::Symbol(*symbol)).next().is_some())
        })
    }

    /// Groups the transitions by source state and label, each group holding
    /// its ordered destinations.
    fn transition_groups(&self) -> Vec<((StateId, Label), Vec<StateId>)> {
        self.transitions()
            .into_iter()
            .chunk_by(|(from, label, _)| (*from, *label))
            .into_iter()
            .map(|(key, group)| (key, group.map(|(_, _, to)| to).collect_vec()))
            .collect_vec()
    }

    /// Renders the same dump as [`Display`], with initial states in green,
    /// final states in cyan and states that are both in bold yellow.
    pub fn to_fancy_string(&self) -> String {
        let paint = |state: StateId| {
            let text = state.to_string();
            match (self.is_state_initial(state), self.is_state_final(state)) {
                (true, true) => text.yellow().bold().to_string(),
                (true, false) => text.green().to_string(),
                (false, true) => text.cyan().to_string(),
                (false, false) => text,
            }
        };

        let mut out = String::new();
        out.push_str(&format!("{}\n\t", "Initial states:".bold()));
        out.push_str(&self.initial.iter().map(|s| paint(*s)).join(" "));
        out.push_str(&format!("\n{}\n\t", "Final states:".bold()));
        out.push_str(&self.accepting.iter().map(|s| paint(*s)).join(" "));
        out.push_str(&format!("\n{}", "Transitions:".bold()));

        let mut last_state = None;
        for ((from, label), targets) in self.transition_groups() {
            if last_state != Some(from) {
                out.push_str(&format!("\n\tFor state {}:", paint(from)));
                last_state = Some(from);
            }
            out.push_str(&format!(
                "\n\t\tFor letter {}: {}",
                label,
                targets.iter().map(|s| paint(*s)).join(" ")
            ));
        }
        out.push('\n');

        out
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Initial states:")?;
        writeln!(f, "\t{}", self.initial.iter().join(" "))?;
        writeln!(f, "Final states:")?;
        writeln!(f, "\t{}", self.accepting.iter().join(" "))?;
        write!(f, "Transitions:")?;

        let mut last_state = None;
        for ((from, label), targets) in self.transition_groups() {
            if last_state != Some(from) {
                write!(f, "\n\tFor state {}:", from)?;
                last_state = Some(from);
            }
            write!(f, "\n\t\tFor letter {}: {}", label, targets.iter().join(" "))?;
        }

        writeln!(f)
    }
}

impl Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("alphabet", &self.alphabet)
            .field("state_count", &self.count_states())
            .field("states", &self.states())
            .field("initial_states", &self.initial)
            .field("final_states", &self.accepting)
            .field("transition_count", &self.count_transitions())
            .field(
                "transitions",
                &self
                    .transitions()
                    .iter()
                    .map(|(from, label, to)| format!("{:?} --- {} --> {:?}", from, label, to))
                    .collect_vec(),
            )
            .finish()
    }
}
