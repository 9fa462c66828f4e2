use crate::automaton::{Automaton, StateId};

/// Finds the lowest non-negative state id that is not used by `automaton`.
/// State ids may be sparse, so this scans upwards from 0 instead of relying
/// on the number of states.
pub fn first_free_state(automaton: &Automaton) -> StateId {
    let mut candidate = 0;

    while automaton.has_state(candidate) {
        candidate += 1;
    }

    candidate
}

#[test]
fn test_first_free_state() {
    let mut automaton = Automaton::new();
    assert_eq!(first_free_state(&automaton), 0);

    automaton.add_state(0);
    automaton.add_state(1);
    automaton.add_state(3);
    assert_eq!(first_free_state(&automaton), 2);

    automaton.add_state(2);
    assert_eq!(first_free_state(&automaton), 4);
}
