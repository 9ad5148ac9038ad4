//! Entropy solver
//!
//! Coordinates the clue history, the candidate lister and the search space to
//! pick the guess expected to leave the fewest possible words.

use super::entropy::expected_entropy;
use super::error::SolverError;
use super::search_space::SearchSpace;
use crate::core::{Clue, Word, WordSet};
use crate::index::CandidateLister;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;

/// Main Wordle solver
///
/// The clue history is an append-only log for the whole game. The lister's state
/// is a projection of it, rebuilt by reset and replay before every query.
#[derive(Debug)]
pub struct EntropySolver<L> {
    candidate_lister: L,
    search_space: SearchSpace,
    clues: Vec<Clue>,
    show_progress: bool,
}

impl<L: CandidateLister> EntropySolver<L> {
    #[must_use]
    pub const fn new(candidate_lister: L, search_space: SearchSpace) -> Self {
        Self {
            candidate_lister,
            search_space,
            clues: Vec::new(),
            show_progress: false,
        }
    }

    /// Show a progress bar while candidates are evaluated
    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Record clues for the rest of the game
    pub fn add_clues(&mut self, clues: &[Clue]) {
        self.clues.extend_from_slice(clues);
        self.candidate_lister.add_clues(clues);
    }

    /// Every clue received so far
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Forget the clue history to start a new game
    pub fn reset(&mut self) {
        self.clues.clear();
        self.candidate_lister.reset_clues();
    }

    #[must_use]
    pub const fn candidate_lister(&self) -> &L {
        &self.candidate_lister
    }

    #[must_use]
    pub const fn search_space(&self) -> &SearchSpace {
        &self.search_space
    }

    /// Words consistent with the whole clue history
    pub fn get_possible_words(&mut self) -> &WordSet {
        self.candidate_lister.reset_clues();
        self.candidate_lister.add_clues(&self.clues);
        self.candidate_lister.get_possible_words()
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    }
}

impl<L: CandidateLister + Clone + Send + Sync> EntropySolver<L> {
    /// Score `candidates` against `possible_words` and return the lowest scoring one
    ///
    /// Candidates are evaluated in lexicographic order and the first minimum wins.
    /// Each rayon job scores on its own copy of the candidate lister; the clue
    /// results those copies cache are kept for later evaluations.
    ///
    /// # Errors
    /// - `EmptySearchSpace` if there are no candidates
    /// - `NoValidTargets` if a candidate's score averages over no targets
    pub fn get_best_candidate(
        &mut self,
        candidates: &WordSet,
        possible_words: &WordSet,
    ) -> Result<(Word, f64), SolverError> {
        let mut candidates: Vec<&Word> = candidates.iter().collect();
        candidates.sort_unstable();
        let mut targets: Vec<Word> = possible_words.iter().cloned().collect();
        targets.sort_unstable();

        let progress = self.progress_bar(candidates.len());
        progress.set_message(format!("{} targets", targets.len()));

        let history = &self.clues;
        let lister = &self.candidate_lister;
        let jobs: Vec<(L, Vec<(usize, Option<f64>)>)> = candidates
            .par_iter()
            .enumerate()
            .fold(
                || (lister.clone(), Vec::new()),
                |(mut lister, mut scores), (index, &candidate)| {
                    let score = expected_entropy(&mut lister, history, candidate, &targets);
                    scores.push((index, score));
                    progress.inc(1);
                    (lister, scores)
                },
            )
            .collect();
        progress.finish_and_clear();

        let mut scores: Vec<Option<f64>> = vec![None; candidates.len()];
        for (worker, job_scores) in jobs {
            for (index, score) in job_scores {
                scores[index] = score;
            }
            self.candidate_lister.absorb(worker);
        }

        let mut best: Option<(&Word, f64)> = None;
        for (&candidate, score) in candidates.iter().zip(scores) {
            let entropy = score.ok_or_else(|| SolverError::NoValidTargets {
                candidate: candidate.to_string(),
            })?;
            if best.is_none_or(|(_, min)| entropy < min) {
                best = Some((candidate, entropy));
            }
        }

        best.map(|(word, entropy)| (word.clone(), entropy))
            .ok_or(SolverError::EmptySearchSpace)
    }

    /// Best next guess together with its expected remaining entropy
    ///
    /// Runs a first pass over the initial candidates of the search space, then a
    /// refinement pass over the follow-up candidates of the winner.
    ///
    /// # Errors
    /// Returns `NoCandidatesRemain` if no word is consistent with the clues, or
    /// any error of [`Self::get_best_candidate`].
    pub fn get_next_guess(&mut self) -> Result<(Word, f64), SolverError> {
        let possible_words = self.get_possible_words().clone();
        let current_search_size = possible_words.len();
        if current_search_size == 0 {
            return Err(SolverError::NoCandidatesRemain);
        }
        debug!("{current_search_size} possible words remain");

        let candidates = self
            .search_space
            .get_initial_candidates(current_search_size)
            .clone();
        debug!("First pass over {} candidates", candidates.len());
        let (best_candidate, entropy) = self.get_best_candidate(&candidates, &possible_words)?;
        debug!("First pass picked {best_candidate} ({entropy:.3} bits)");

        let follow_up = self
            .search_space
            .get_follow_up_candidates(&best_candidate, current_search_size)
            .into_owned();
        debug!("Second pass over {} candidates", follow_up.len());
        let (best, entropy) = self.get_best_candidate(&follow_up, &possible_words)?;
        debug!("Next guess {best} ({entropy:.3} bits)");

        Ok((best, entropy))
    }

    /// Best next guess
    ///
    /// # Errors
    /// See [`Self::get_next_guess`].
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::{Clue, Word, word_set};
    /// use wordle_clues::index::{ClueCache, ConstraintIndex};
    /// use wordle_clues::solver::{EntropySolver, SearchSpace};
    ///
    /// let words = ["hello", "world", "happy", "apple", "grape", "melon"];
    /// let index = ConstraintIndex::new(words.map(Word::from), 5, ClueCache::default());
    /// let mut solver = EntropySolver::new(index, SearchSpace::new(word_set(words), None));
    ///
    /// solver.add_clues(&[Clue::new(0, 'h', true, true)]);
    /// assert_eq!(solver.get_possible_words().len(), 2);
    /// assert!(solver.get_next_word().is_ok());
    /// ```
    pub fn get_next_word(&mut self) -> Result<Word, SolverError> {
        self.get_next_guess().map(|(word, _)| word)
    }
}
