use std::fmt::Display;

/// The label of a transition. Either a symbol of the alphabet or an epsilon
/// label, which can be taken without reading any input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Symbol(char),
    Epsilon,
}

/// Shorthand for [`Label::Epsilon`], so transitions can be written as
/// `automaton.add_transition(0, EPSILON, 1)`.
pub const EPSILON: Label = Label::Epsilon;

impl Label {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }

    /// Returns the symbol of this label, or `None` for epsilon.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Label::Symbol(c) => Some(*c),
            Label::Epsilon => None,
        }
    }

    /// Checks whether reading `letter` can take a transition with this label.
    pub fn matches(&self, letter: char) -> bool {
        match self {
            Label::Symbol(c) => *c == letter,
            Label::Epsilon => false,
        }
    }
}

impl From<char> for Label {
    fn from(value: char) -> Self {
        Label::Symbol(value)
    }
}

impl From<Option<char>> for Label {
    fn from(value: Option<char>) -> Self {
        match value {
            Some(c) => Label::Symbol(c),
            None => Label::Epsilon,
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Symbol(c) => write!(f, "{}", c),
            Label::Epsilon => write!(f, "ε"),
        }
    }
}
