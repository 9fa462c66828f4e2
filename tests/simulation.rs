use std::collections::BTreeSet;

use finite_automaton::automaton::{Automaton, EPSILON};

/// Accepts the words containing `ab` with epsilon transitions between the
/// parts.
fn contains_ab() -> Automaton {
    let mut fa = Automaton::new();
    fa.add_symbol('a');
    fa.add_symbol('b');
    for state in 0..5 {
        fa.add_state(state);
    }
    fa.set_state_initial(0);
    fa.set_state_final(4);

    fa.add_transition(0, 'a', 0);
    fa.add_transition(0, 'b', 0);
    fa.add_transition(0, EPSILON, 1);
    fa.add_transition(1, 'a', 2);
    fa.add_transition(2, EPSILON, 3);
    fa.add_transition(3, 'b', 4);
    fa.add_transition(4, 'a', 4);
    fa.add_transition(4, 'b', 4);

    fa
}

#[test]
fn test_make_transition() {
    let fa = contains_ab();

    assert_eq!(
        fa.make_transition(&BTreeSet::from([0, 1]), 'a'),
        BTreeSet::from([0, 2])
    );
    assert_eq!(
        fa.make_transition(&BTreeSet::from([1, 2]), 'b'),
        BTreeSet::new()
    );
    assert_eq!(
        fa.make_transition(&BTreeSet::from([2]), EPSILON),
        BTreeSet::from([3])
    );
    assert_eq!(fa.make_transition(&BTreeSet::new(), 'a'), BTreeSet::new());
}

#[test]
fn test_epsilon_closure() {
    let fa = contains_ab();

    assert_eq!(
        fa.epsilon_closure(&BTreeSet::from([0])),
        BTreeSet::from([0, 1])
    );
    assert_eq!(
        fa.epsilon_closure(&BTreeSet::from([2, 4])),
        BTreeSet::from([2, 3, 4])
    );
}

#[test]
fn test_read_string() {
    let fa = contains_ab();

    assert_eq!(fa.read_string(""), BTreeSet::from([0, 1]));
    assert_eq!(fa.read_string("a"), BTreeSet::from([0, 1, 2, 3]));
    assert_eq!(fa.read_string("ab"), BTreeSet::from([0, 1, 4]));
    assert_eq!(fa.read_string("c"), BTreeSet::new());
}

#[test]
fn test_matches() {
    let fa = contains_ab();

    assert!(fa.matches("ab"));
    assert!(fa.matches("bbabaa"));
    assert!(!fa.matches(""));
    assert!(!fa.matches("ba"));
    assert!(!fa.matches("bbbaaa"));
    assert!(!fa.matches("abc"));
}

#[test]
fn test_matches_without_initial_state() {
    let mut fa = contains_ab();
    fa.remove_initial_state(0);

    assert!(!fa.matches("ab"));
    assert!(fa.read_string("ab").is_empty());
}

#[test]
fn test_dfs() {
    let mut fa = contains_ab();
    fa.add_state(9);

    let outcome = fa.dfs([2], false);
    assert_eq!(outcome.visited, BTreeSet::from([2, 3, 4]));
    assert!(outcome.found_final);

    let outcome = fa.dfs([9, 42], false);
    assert_eq!(outcome.visited, BTreeSet::from([9]));
    assert!(!outcome.found_final);

    let outcome = fa.dfs([0], true);
    assert!(outcome.found_final);
    assert!(outcome.visited.contains(&4));
    assert!(!outcome.visited.contains(&9));
}

#[test]
fn test_dfs_on_long_chain() {
    let mut fa = Automaton::new();
    fa.add_symbol('a');
    for state in 0..1000 {
        fa.add_state(state);
    }
    for state in 0..999 {
        fa.add_transition(state, 'a', state + 1);
    }
    fa.set_state_initial(0);
    fa.set_state_final(999);

    let outcome = fa.dfs([0], false);
    assert_eq!(outcome.visited.len(), 1000);
    assert!(outcome.found_final);

    assert!(fa.matches(&"a".repeat(999)));
    assert!(!fa.matches(&"a".repeat(998)));
}
