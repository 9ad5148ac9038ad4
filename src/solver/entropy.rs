//! Expected remaining entropy of a guess
//!
//! For every possible target, simulate the clues the guess would receive, replay
//! them on top of the clue history and measure log₂ of the words left.

use crate::core::{Clue, Word, simulate_clues};
use crate::index::CandidateLister;

/// Entropy in bits of a uniform choice among `count` words
///
/// Returns `None` for zero words, where the logarithm is undefined.
#[must_use]
pub fn remaining_entropy(count: usize) -> Option<f64> {
    (count > 0).then(|| (count as f64).log2())
}

/// Average remaining entropy if `candidate` were guessed
///
/// Targets whose simulation leaves no possible word are skipped. Returns `None`
/// when no target contributes, so the average is undefined.
///
/// # Formula
/// E = (1/|T|) Σ log₂ |possible words after history + clues(candidate, t)|
///
/// Lower is better.
pub fn expected_entropy<L: CandidateLister>(
    lister: &mut L,
    history: &[Clue],
    candidate: &Word,
    targets: &[Word],
) -> Option<f64> {
    let mut total = 0.0;
    let mut terms = 0usize;

    for target in targets {
        lister.reset_clues();
        lister.add_clues(history);
        lister.add_clues(&simulate_clues(candidate, target));

        if let Some(entropy) = remaining_entropy(lister.get_possible_words().len()) {
            total += entropy;
            terms += 1;
        }
    }

    (terms > 0).then(|| total / terms as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{ClueCache, ConstraintIndex};

    const WORDS: [&str; 12] = [
        "hello", "world", "happy", "apple", "grape", "melon", "peach", "arise", "awake", "alive",
        "other", "green",
    ];

    fn sample_index() -> ConstraintIndex {
        ConstraintIndex::new(WORDS.map(Word::from), 5, ClueCache::default())
    }

    fn targets(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| Word::from(w)).collect()
    }

    #[test]
    fn remaining_entropy_values() {
        assert_eq!(remaining_entropy(0), None);
        assert_eq!(remaining_entropy(1), Some(0.0));
        assert!((remaining_entropy(8).unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn perfect_split_has_zero_entropy() {
        // Guessing HELLO tells HELLO and HAPPY apart
        let mut index = sample_index();
        let history = [Clue::new(0, 'h', true, true)];
        let entropy = expected_entropy(
            &mut index,
            &history,
            &Word::from("hello"),
            &targets(&["hello", "happy"]),
        )
        .unwrap();
        assert!(entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn grape_scores_lowest_from_scratch() {
        let mut index = sample_index();
        let all = targets(&WORDS);

        let grape = expected_entropy(&mut index, &[], &Word::from("grape"), &all).unwrap();
        assert!((grape - 0.25).abs() < 1e-9);

        let awake = expected_entropy(&mut index, &[], &Word::from("awake"), &all).unwrap();
        assert!(awake > grape);
    }

    #[test]
    fn no_targets_is_undefined() {
        let mut index = sample_index();
        assert_eq!(expected_entropy(&mut index, &[], &Word::from("hello"), &[]), None);
    }

    #[test]
    fn targets_left_without_words_are_skipped() {
        // The history rules out every word, so each target's term is undefined
        let mut index = sample_index();
        let history = [Clue::new(0, 'z', true, true)];
        let entropy = expected_entropy(
            &mut index,
            &history,
            &Word::from("hello"),
            &targets(&["hello", "world"]),
        );
        assert_eq!(entropy, None);
    }

    #[test]
    fn empty_targets_only_drop_their_own_term() {
        // HELLO and HAPPY remain; guessing HELLO against WORLD leaves nothing
        // and is skipped, while HELLO against itself leaves one word
        let mut index = sample_index();
        let history = [Clue::new(0, 'h', true, true)];
        let entropy = expected_entropy(
            &mut index,
            &history,
            &Word::from("hello"),
            &targets(&["hello", "world"]),
        );
        assert_eq!(entropy, Some(0.0));
    }
}
