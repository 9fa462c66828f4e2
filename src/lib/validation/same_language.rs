use std::collections::BTreeSet;

use itertools::{Itertools, repeat_n};

use crate::automaton::Automaton;

/// Enumerates every word over the union of both alphabets whose length is at
/// most `max_word_length`, shortest words first.
pub fn words_up_to(a: &Automaton, b: &Automaton, max_word_length: usize) -> Vec<String> {
    let alphabet: BTreeSet<char> = a.alphabet().union(b.alphabet()).copied().collect();

    (0..=max_word_length)
        .flat_map(|length| {
            repeat_n(alphabet.iter(), length)
                .multi_cartesian_product()
                .map(|word| word.into_iter().collect::<String>())
        })
        .collect_vec()
}

/// Checks if two automata accept the same words up to a certain length.
pub fn same_language(a: &Automaton, b: &Automaton, max_word_length: usize) -> bool {
    words_up_to(a, b, max_word_length)
        .iter()
        .all(|word| a.matches(word) == b.matches(word))
}

pub fn assert_same_language(a: &Automaton, b: &Automaton, max_word_length: usize) {
    for word in words_up_to(a, b, max_word_length) {
        match (a.matches(&word), b.matches(&word)) {
            (true, false) => {
                panic!(
                    "{:?} is accepted by automaton `a` but not by automaton `b`. Thus their languages are not equal.",
                    word
                );
            }
            (false, true) => {
                panic!(
                    "{:?} is accepted by automaton `b` but not by automaton `a`. Thus their languages are not equal.",
                    word
                );
            }
            _ => {}
        }
    }
}

/// Assert that the language accepted by automaton `a` is the inverse of the
/// language accepted by automaton `b`. Meaning no word is accepted by both and
/// no word is accepted by none.
pub fn assert_inverse_language(a: &Automaton, b: &Automaton, max_word_length: usize) {
    for word in words_up_to(a, b, max_word_length) {
        match (a.matches(&word), b.matches(&word)) {
            (true, true) => {
                panic!(
                    "{:?} is accepted by automaton `a` and by automaton `b`. Thus their languages are not inverse.",
                    word
                );
            }
            (false, false) => {
                panic!(
                    "{:?} is accepted by neither automaton. Thus their languages are not inverse.",
                    word
                );
            }
            _ => {}
        }
    }
}

/// Assert that the language accepted by automaton `a` is a subset of the
/// language accepted by automaton `b`.
pub fn assert_subset_language(a: &Automaton, b: &Automaton, max_word_length: usize) {
    for word in words_up_to(a, b, max_word_length) {
        if a.matches(&word) && !b.matches(&word) {
            panic!(
                "{:?} is accepted by automaton `a` but not by automaton `b`. Thus the language of `a` is not a subset of `b`.",
                word
            );
        }
    }
}
