//! Generic inverted index
//!
//! Maps a term to the set of documents containing it. The constraint index keeps one
//! of these per character slot, with characters as terms and words as documents.

use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

/// Insertion-only inverted index from terms `T` to documents `D`
#[derive(Debug, Clone)]
pub struct PositionIndex<T, D> {
    postings: FxHashMap<T, FxHashSet<D>>,
    empty: FxHashSet<D>,
}

impl<T, D> Default for PositionIndex<T, D> {
    fn default() -> Self {
        Self {
            postings: FxHashMap::default(),
            empty: FxHashSet::default(),
        }
    }
}

impl<T, D> PositionIndex<T, D>
where
    T: Eq + Hash + Clone,
    D: Eq + Hash + Clone,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term-document pair. Adding the same pair twice is a no-op.
    pub fn add(&mut self, term: T, document: D) {
        self.postings.entry(term).or_default().insert(document);
    }

    /// Documents containing `term`, empty if the term was never indexed
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::index::PositionIndex;
    ///
    /// let mut index = PositionIndex::new();
    /// index.add('a', "abc");
    /// index.add('a', "abd");
    ///
    /// assert_eq!(index.get(&'a').len(), 2);
    /// assert!(index.get(&'z').is_empty());
    /// ```
    #[must_use]
    pub fn get(&self, term: &T) -> &FxHashSet<D> {
        self.postings.get(term).unwrap_or(&self.empty)
    }

    /// Documents containing any of `terms`; empty input yields an empty set
    #[must_use]
    pub fn get_contains(&self, terms: &[T]) -> FxHashSet<D> {
        terms
            .iter()
            .flat_map(|term| self.get(term).iter().cloned())
            .collect()
    }

    /// Documents containing some indexed term outside `terms`
    ///
    /// An empty exclusion list yields every indexed document.
    #[must_use]
    pub fn get_does_not_contain(&self, terms: &[T]) -> FxHashSet<D> {
        self.postings
            .iter()
            .filter(|(term, _)| !terms.contains(*term))
            .flat_map(|(_, documents)| documents.iter().cloned())
            .collect()
    }

    /// Every term ever inserted
    #[must_use]
    pub fn get_all_terms(&self) -> FxHashSet<T> {
        self.postings.keys().cloned().collect()
    }

    /// Every document ever inserted
    #[must_use]
    pub fn get_all_documents(&self) -> FxHashSet<D> {
        self.get_does_not_contain(&[])
    }
}
