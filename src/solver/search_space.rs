//! Candidate search space
//!
//! Evaluating every vocabulary word against a large set of possible words is
//! expensive. When many words remain, a first pass only scores group
//! representatives and a second pass refines within the winning group.

use crate::core::{Word, WordSet};
use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// Mapping from a representative word to the words similar to it (itself included)
pub type Groups = FxHashMap<Word, WordSet>;

/// Default threshold under which the full vocabulary is searched
pub const DEFAULT_MAX_SEARCH_SIZE: usize = 20;

/// Decides which guesses are worth scoring for a given number of possible words
#[derive(Debug, Clone)]
pub struct SearchSpace {
    all_words: WordSet,
    groups: Option<Groups>,
    representatives: WordSet,
    max_search_size: usize,
}

impl SearchSpace {
    /// Create a search space over `all_words`, optionally reduced through `groups`
    ///
    /// Every word of `all_words` is expected to be a key or a member of some group.
    #[must_use]
    pub fn new(all_words: WordSet, groups: Option<Groups>) -> Self {
        let representatives = groups
            .as_ref()
            .map(|groups| groups.keys().cloned().collect())
            .unwrap_or_default();

        Self {
            all_words,
            groups,
            representatives,
            max_search_size: DEFAULT_MAX_SEARCH_SIZE,
        }
    }

    /// Set the number of possible words up to which all words are searched
    #[must_use]
    pub const fn with_max_search_size(mut self, max_search_size: usize) -> Self {
        self.max_search_size = max_search_size;
        self
    }

    #[must_use]
    pub const fn max_search_size(&self) -> usize {
        self.max_search_size
    }

    #[must_use]
    pub const fn groups(&self) -> Option<&Groups> {
        self.groups.as_ref()
    }

    fn use_all_words(&self, current_search_size: usize) -> bool {
        self.groups.is_none() || current_search_size <= self.max_search_size
    }

    /// Candidates for the first evaluation pass
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::{Word, word_set};
    /// use wordle_clues::solver::{Groups, SearchSpace};
    ///
    /// let groups: Groups = [
    ///     (Word::from("abc"), word_set(["abc", "ghi"])),
    ///     (Word::from("def"), word_set(["def", "jkl"])),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let space = SearchSpace::new(word_set(["abc", "def", "ghi", "jkl"]), Some(groups))
    ///     .with_max_search_size(5);
    ///
    /// assert_eq!(space.get_initial_candidates(3).len(), 4);
    /// assert_eq!(*space.get_initial_candidates(10), word_set(["abc", "def"]));
    /// ```
    #[must_use]
    pub fn get_initial_candidates(&self, current_search_size: usize) -> &WordSet {
        if self.use_all_words(current_search_size) {
            &self.all_words
        } else {
            &self.representatives
        }
    }

    /// Candidates for the refinement pass after `best_candidate` won the first pass
    #[must_use]
    pub fn get_follow_up_candidates(
        &self,
        best_candidate: &Word,
        current_search_size: usize,
    ) -> Cow<'_, WordSet> {
        let single = || Cow::Owned(std::iter::once(best_candidate.clone()).collect());

        if self.use_all_words(current_search_size) {
            return single();
        }

        // The best candidate always comes from the representatives, which are the group keys
        self.groups
            .as_ref()
            .and_then(|groups| groups.get(best_candidate))
            .map_or_else(single, Cow::Borrowed)
    }
}
