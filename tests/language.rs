use finite_automaton::{
    automaton::{Automaton, EPSILON},
    validation::same_language::{assert_same_language, assert_subset_language},
};

fn build(
    symbols: &[char],
    states: &[i32],
    initial: &[i32],
    finals: &[i32],
    transitions: &[(i32, char, i32)],
) -> Automaton {
    let mut fa = Automaton::new();
    for symbol in symbols {
        fa.add_symbol(*symbol);
    }
    for state in states {
        fa.add_state(*state);
    }
    for state in initial {
        fa.set_state_initial(*state);
    }
    for state in finals {
        fa.set_state_final(*state);
    }
    for (from, symbol, to) in transitions {
        fa.add_transition(*from, *symbol, *to);
    }

    fa
}

fn ends_with_ab() -> Automaton {
    build(
        &['a', 'b'],
        &[0, 1, 2],
        &[0],
        &[2],
        &[(0, 'a', 0), (0, 'b', 0), (0, 'a', 1), (1, 'b', 2)],
    )
}

fn ends_with_b() -> Automaton {
    build(
        &['a', 'b'],
        &[0, 1],
        &[0],
        &[1],
        &[(0, 'a', 0), (0, 'b', 1), (1, 'a', 0), (1, 'b', 1)],
    )
}

#[test]
fn test_is_language_empty() {
    // initial state that is final
    let fa = build(&['a'], &[0], &[0], &[0], &[]);
    assert!(!fa.is_language_empty());

    // no final state
    let fa = build(&['a'], &[0, 1], &[0], &[], &[(0, 'a', 1)]);
    assert!(fa.is_language_empty());

    // no initial state
    let fa = build(&['a'], &[0, 1], &[], &[1], &[(0, 'a', 1)]);
    assert!(fa.is_language_empty());

    // final state not reachable
    let fa = build(&['a'], &[0, 1, 2], &[0], &[2], &[(0, 'a', 1), (2, 'a', 1)]);
    assert!(fa.is_language_empty());

    // final state reachable
    let fa = build(&['a'], &[0, 1, 2], &[0], &[2], &[(0, 'a', 1), (1, 'a', 2)]);
    assert!(!fa.is_language_empty());
}

#[test]
fn test_is_language_empty_follows_epsilon() {
    let mut fa = build(&['a'], &[0, 1], &[0], &[1], &[]);
    assert!(fa.is_language_empty());

    fa.add_transition(0, EPSILON, 1);
    assert!(!fa.is_language_empty());
}

#[test]
#[should_panic(expected = "Automaton must be valid")]
fn test_is_language_empty_requires_validity() {
    let mut fa = Automaton::new();
    fa.add_symbol('a');
    fa.is_language_empty();
}

#[test]
fn test_has_empty_intersection_with() {
    let only_a = build(&['a', 'b'], &[0], &[0], &[0], &[(0, 'a', 0)]);

    assert!(only_a.has_empty_intersection_with(&ends_with_b()));
    assert!(!ends_with_ab().has_empty_intersection_with(&ends_with_b()));
}

#[test]
fn test_is_included_in() {
    let ends_with_ab = ends_with_ab();
    let ends_with_b = ends_with_b();

    assert!(ends_with_ab.is_included_in(&ends_with_b));
    assert!(!ends_with_b.is_included_in(&ends_with_ab));
    assert!(ends_with_ab.is_included_in(&ends_with_ab));

    assert_subset_language(&ends_with_ab, &ends_with_b, 7);
}

#[test]
fn test_is_included_in_with_unknown_symbol() {
    let all_words = build(&['a'], &[0], &[0], &[0], &[(0, 'a', 0)]);
    let with_c = build(&['a', 'c'], &[0, 1], &[0], &[1], &[(0, 'c', 1)]);

    assert!(!with_c.is_included_in(&all_words));
    assert!(!all_words.is_included_in(&with_c));
}

#[test]
fn test_empty_language_is_included_everywhere() {
    let empty = build(&['a', 'b'], &[0], &[], &[0], &[]);

    assert!(empty.is_included_in(&ends_with_ab()));
    assert!(!ends_with_ab().is_included_in(&empty));
}

#[test]
fn test_is_equivalent_to() {
    let fa = ends_with_ab();

    assert!(fa.is_equivalent_to(&fa.determinize()));
    assert!(fa.is_equivalent_to(&fa.mirror().mirror()));
    assert!(fa.is_equivalent_to(&fa.minimize_brzozowski()));
    assert!(!fa.is_equivalent_to(&ends_with_b()));
}

#[test]
fn test_remove_non_accessible_states_scenario() {
    let mut fa = build(
        &['a'],
        &[0, 1, 2, 3],
        &[0],
        &[],
        &[(1, 'a', 1), (1, 'a', 2), (2, 'a', 3), (3, 'a', 3)],
    );

    fa.remove_non_accessible_states();

    assert_eq!(fa.count_states(), 1);
    assert_eq!(fa.count_transitions(), 0);
    assert!(fa.has_state(0));
}

#[test]
fn test_remove_non_accessible_states_keeps_language() {
    let mut fa = ends_with_ab();
    fa.add_state(7);
    fa.add_state(8);
    fa.set_state_final(8);
    fa.add_transition(7, 'b', 8);
    fa.add_transition(8, 'a', 1);
    let before = fa.clone();

    fa.remove_non_accessible_states();

    assert_eq!(fa.states(), vec![0, 1, 2]);
    assert!(fa.count_states() <= before.count_states());
    assert_same_language(&before, &fa, 6);
}

#[test]
fn test_remove_non_accessible_states_without_initial_state() {
    let mut fa = build(&['a'], &[3, 5], &[], &[5], &[(3, 'a', 5)]);

    fa.remove_non_accessible_states();

    assert!(fa.is_valid());
    assert_eq!(fa.states(), vec![3]);
    assert!(fa.is_language_empty());
}

#[test]
fn test_remove_non_co_accessible_states() {
    let mut fa = ends_with_ab();
    fa.add_state(3);
    fa.add_transition(1, 'a', 3);
    fa.add_transition(3, 'b', 3);
    let before = fa.clone();

    fa.remove_non_co_accessible_states();

    assert_eq!(fa.states(), vec![0, 1, 2]);
    assert_eq!(fa.initial_states(), before.initial_states());
    assert_eq!(fa.final_states(), before.final_states());
    assert_eq!(fa.count_transitions(), 4);
    assert_same_language(&before, &fa, 6);
}
