//! Candidate listing capability consumed by the solver

use crate::core::{Clue, WordSet};

/// Lists the words consistent with the clues received so far
pub trait CandidateLister {
    /// Apply a single clue, narrowing the possible words
    fn add_clue(&mut self, clue: Clue);

    /// Apply clues in order
    fn add_clues(&mut self, clues: &[Clue]) {
        for &clue in clues {
            self.add_clue(clue);
        }
    }

    /// Words consistent with every clue applied since the last reset
    fn get_possible_words(&self) -> &WordSet;

    /// The whole vocabulary
    fn get_all_words(&self) -> &WordSet;

    /// Forget applied clues, making every word possible again
    fn reset_clues(&mut self);

    /// Keep what a working copy of this lister learned, such as cached clue results
    ///
    /// The applied clues of `other` are ignored. Listers without reusable state
    /// keep nothing.
    fn absorb(&mut self, _other: Self)
    where
        Self: Sized,
    {
    }
}
