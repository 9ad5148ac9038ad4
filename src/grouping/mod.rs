//! Word grouping by character overlap
//!
//! Produces the representative → similar-words mapping consumed by the search
//! space. Words are encoded as multi-hot character sets and compared by
//! intersection over union (IOU).

use crate::core::{Word, WordSet};
use crate::solver::Groups;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Added to the IOU denominator, so even identical sets score just below 1
const IOU_TOLERANCE: f64 = 1e-6;

/// Row sums closer than this are considered tied
const SUM_TOLERANCE: f64 = 1e-7;

/// Keep only the words whose characters are all distinct
///
/// # Examples
/// ```
/// use wordle_clues::core::word_set;
/// use wordle_clues::grouping::filter_repeated_characters;
///
/// let words = word_set(["abc", "aab", "def"]);
/// assert_eq!(filter_repeated_characters(&words), word_set(["abc", "def"]));
/// ```
#[must_use]
pub fn filter_repeated_characters(words: &WordSet) -> WordSet {
    words
        .iter()
        .filter(|word| !word.has_repeated_characters())
        .cloned()
        .collect()
}

/// Multi-hot encoding of the distinct characters of a word
#[derive(Debug, Clone, PartialEq, Eq)]
struct CharMask {
    bits: Vec<u64>,
}

impl CharMask {
    fn iou(&self, other: &Self) -> f64 {
        let (intersection, union) = self
            .bits
            .iter()
            .zip(&other.bits)
            .fold((0u32, 0u32), |(i, u), (a, b)| {
                (i + (a & b).count_ones(), u + (a | b).count_ones())
            });
        f64::from(intersection) / (f64::from(union) + IOU_TOLERANCE)
    }
}

/// Encode words over the alphabet of characters they use
fn encode_words(words: &[Word]) -> Vec<CharMask> {
    let mut alphabet: FxHashMap<char, usize> = FxHashMap::default();
    for character in words.iter().flat_map(Word::chars) {
        let next = alphabet.len();
        alphabet.entry(character).or_insert(next);
    }

    let blocks = alphabet.len().div_ceil(64);
    words
        .iter()
        .map(|word| {
            let mut bits = vec![0u64; blocks];
            for character in word.chars() {
                let bit = alphabet[&character];
                bits[bit / 64] |= 1 << (bit % 64);
            }
            CharMask { bits }
        })
        .collect()
}

/// First index with the largest sum among `remaining`
fn most_overlapping(remaining: &[usize], sums: &[f64]) -> Option<usize> {
    remaining.iter().copied().fold(None, |best, index| match best {
        Some(current) if sums[index] <= sums[current] + SUM_TOLERANCE => Some(current),
        _ => Some(index),
    })
}

/// Group words by the characters they share
///
/// Up to `max_groups` times, the remaining word with the largest total IOU
/// against the other remaining words becomes a representative, and every
/// remaining word with IOU ≥ `iou_threshold` against it (itself included) forms
/// its group. Words left over afterwards join the group whose representative
/// shares the most distinct characters with them, earliest group first on ties.
///
/// With `max_groups == 0` no group is formed and the result is empty.
///
/// # Examples
/// ```
/// use wordle_clues::core::{Word, word_set};
/// use wordle_clues::grouping::group_by_overlapping_characters;
///
/// let words = ["abc", "bcd", "abe", "bde"].map(Word::from);
/// let groups = group_by_overlapping_characters(&words, 1, 0.5);
///
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[&Word::from("abc")], word_set(["abc", "bcd", "abe", "bde"]));
/// ```
#[must_use]
pub fn group_by_overlapping_characters(
    words: &[Word],
    max_groups: usize,
    iou_threshold: f64,
) -> Groups {
    let masks = encode_words(words);

    let mut sums: Vec<f64> = (0..masks.len())
        .into_par_iter()
        .map(|i| masks.iter().map(|other| masks[i].iou(other)).sum())
        .collect();

    let mut remaining: Vec<usize> = (0..words.len()).collect();
    let mut grouped = vec![false; words.len()];
    let mut groups: Vec<(Word, WordSet)> = Vec::new();

    while groups.len() < max_groups {
        let Some(representative) = most_overlapping(&remaining, &sums) else {
            break;
        };

        let members: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&index| {
                index == representative
                    || masks[representative].iou(&masks[index]) >= iou_threshold
            })
            .collect();
        for &member in &members {
            grouped[member] = true;
        }
        remaining.retain(|&index| !grouped[index]);

        for &index in &remaining {
            let removed: f64 = members
                .iter()
                .map(|&member| masks[index].iou(&masks[member]))
                .sum();
            sums[index] -= removed;
        }

        debug!(
            "Group {} around \"{}\" with {} words, {} words left",
            groups.len() + 1,
            words[representative],
            members.len(),
            remaining.len()
        );
        groups.push((
            words[representative].clone(),
            members.iter().map(|&member| words[member].clone()).collect(),
        ));
    }

    if !groups.is_empty() {
        let keys: Vec<_> = groups.iter().map(|(key, _)| key.distinct_chars()).collect();
        for &index in &remaining {
            let word = &words[index];
            let chars = word.distinct_chars();
            let best = keys
                .iter()
                .map(|key| key.intersection(&chars).count())
                .enumerate()
                .fold((0, 0), |(best, most), (group, shared)| {
                    if shared > most { (group, shared) } else { (best, most) }
                })
                .0;
            groups[best].1.insert(word.clone());
        }
    }

    groups.into_iter().collect()
}

/// Check that every word is a representative or a member of some group
#[must_use]
pub fn covers_vocabulary(groups: &Groups, words: &WordSet) -> bool {
    words
        .iter()
        .all(|word| groups.contains_key(word) || groups.values().any(|group| group.contains(word)))
}
