//! Clue-driven constraint index
//!
//! Keeps one inverted index per character slot and narrows the set of currently
//! valid words as clues arrive. Per-clue results are cached, except when they
//! depend on characters already seen in earlier clues.

use super::cache::{Cache, ClueCache};
use super::inverted::PositionIndex;
use super::lister::CandidateLister;
use crate::core::{Clue, Color, Word, WordSet};
use log::{trace, warn};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Vocabulary and per-position indices, built once and shared between copies
#[derive(Debug)]
struct Vocabulary {
    words: WordSet,
    word_length: usize,
    indices: Vec<PositionIndex<char, Word>>,
}

impl Vocabulary {
    fn build(words: impl IntoIterator<Item = Word>, word_length: usize) -> Self {
        let mut indices: Vec<PositionIndex<char, Word>> =
            (0..word_length).map(|_| PositionIndex::new()).collect();
        let mut vocabulary = WordSet::default();

        for word in words {
            if word.char_count() != word_length {
                warn!(
                    "Skipping \"{word}\": expected {word_length} characters, got {}",
                    word.char_count()
                );
                continue;
            }
            if !vocabulary.insert(word.clone()) {
                continue;
            }
            for (index, character) in indices.iter_mut().zip(word.chars()) {
                index.add(character, word.clone());
            }
        }

        Self {
            words: vocabulary,
            word_length,
            indices,
        }
    }

    /// Words with `character` at `position`; empty for positions outside the word
    fn postings(&self, position: usize, character: char) -> WordSet {
        self.indices
            .get(position)
            .map(|index| index.get(&character).clone())
            .unwrap_or_default()
    }
}

/// Index of the vocabulary that tracks the words consistent with applied clues
///
/// # Examples
/// ```
/// use wordle_clues::core::{Clue, Word};
/// use wordle_clues::index::{CandidateLister, ClueCache, ConstraintIndex};
///
/// let words = ["hello", "happy", "world"].map(Word::from);
/// let mut index = ConstraintIndex::new(words, 5, ClueCache::default());
///
/// index.add_clue(Clue::new(0, 'h', true, true));
/// assert_eq!(index.get_possible_words().len(), 2);
///
/// index.reset_clues();
/// assert_eq!(index.get_possible_words(), index.get_all_words());
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintIndex<C = ClueCache> {
    vocabulary: Arc<Vocabulary>,
    cache: C,
    clues: Vec<Clue>,
    solved_characters: FxHashSet<char>,
    candidate_characters: FxHashSet<char>,
    // None while no clue has narrowed the vocabulary
    currently_valid: Option<WordSet>,
}

impl<C: Cache<Clue, WordSet>> ConstraintIndex<C> {
    /// Build the index over `words`
    ///
    /// Words that are not exactly `word_length` characters long are skipped.
    pub fn new(words: impl IntoIterator<Item = Word>, word_length: usize, cache: C) -> Self {
        Self {
            vocabulary: Arc::new(Vocabulary::build(words, word_length)),
            cache,
            clues: Vec::new(),
            solved_characters: FxHashSet::default(),
            candidate_characters: FxHashSet::default(),
            currently_valid: None,
        }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.vocabulary.word_length
    }

    /// Clues applied since the last reset
    #[must_use]
    pub fn applied_clues(&self) -> &[Clue] {
        &self.clues
    }

    #[must_use]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    fn is_observed(&self, character: char) -> bool {
        self.solved_characters.contains(&character)
            || self.candidate_characters.contains(&character)
    }

    fn record_character(&mut self, clue: Clue) {
        match clue.color() {
            Color::Correct => {
                self.solved_characters.insert(clue.character());
            }
            Color::Present => {
                self.candidate_characters.insert(clue.character());
            }
            Color::Absent => {}
        }
    }

    /// Words consistent with `clue` taken on its own
    ///
    /// An absent clue for an observed character only rules out its own slot,
    /// since the character is known to appear elsewhere.
    fn evaluate(&self, clue: Clue, observed: bool) -> WordSet {
        let vocabulary = &self.vocabulary;
        let character = clue.character();

        match clue.color() {
            Color::Correct => vocabulary.postings(clue.position(), character),
            Color::Present => (0..vocabulary.word_length)
                .filter(|&position| position != clue.position())
                .flat_map(|position| vocabulary.postings(position, character))
                .collect(),
            Color::Absent if observed => vocabulary
                .indices
                .get(clue.position())
                .map(|index| index.get_does_not_contain(&[character]))
                .unwrap_or_default(),
            Color::Absent => vocabulary
                .indices
                .iter()
                .fold(vocabulary.words.clone(), |valid, index| {
                    let allowed = index.get_does_not_contain(&[character]);
                    valid.into_iter().filter(|word| allowed.contains(word)).collect()
                }),
        }
    }
}

/// Intersect the current selection with `valid`
fn narrow(current: &mut Option<WordSet>, valid: &WordSet) {
    match current {
        Some(words) => words.retain(|word| valid.contains(word)),
        None => *current = Some(valid.clone()),
    }
}

impl<C: Cache<Clue, WordSet>> CandidateLister for ConstraintIndex<C> {
    fn add_clue(&mut self, clue: Clue) {
        self.clues.push(clue);
        let observed = self.is_observed(clue.character());

        if !observed && let Some(cached) = self.cache.get(&clue) {
            trace!("Cache hit for clue {clue}");
            narrow(&mut self.currently_valid, cached);
            self.record_character(clue);
            return;
        }

        let valid_words = self.evaluate(clue, observed);
        self.record_character(clue);
        narrow(&mut self.currently_valid, &valid_words);

        // Results for observed characters depend on earlier clues
        if observed {
            trace!("Clue {clue} concerns an observed character, not cached");
        } else {
            trace!("Caching {} words for clue {clue}", valid_words.len());
            self.cache.set(&clue, valid_words);
        }
    }

    fn get_possible_words(&self) -> &WordSet {
        self.currently_valid
            .as_ref()
            .unwrap_or(&self.vocabulary.words)
    }

    fn get_all_words(&self) -> &WordSet {
        &self.vocabulary.words
    }

    fn reset_clues(&mut self) {
        self.clues.clear();
        self.solved_characters.clear();
        self.candidate_characters.clear();
        self.currently_valid = None;
    }

    fn absorb(&mut self, other: Self) {
        self.cache.absorb(other.cache);
    }
}
