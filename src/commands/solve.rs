//! Word solving command
//!
//! Plays a full game against a known target and records the solution path.

use crate::core::{Clue, Word, WordError, simulate_clues};
use crate::index::CandidateLister;
use crate::solver::{EntropySolver, SolverError};
use log::debug;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub clues: Vec<Clue>,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected remaining entropy, when the solver had to choose
    pub entropy: Option<f64>,
}

/// Error type for the solve command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("Invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error("Target \"{0}\" is not in the word list")]
    UnknownTarget(String),
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Solve `target` with the solver, starting from an empty clue history
///
/// If `opening` is provided, it is used as the first guess instead of letting
/// the solver choose. A single remaining possible word is guessed directly.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word of the solver's length, or not in its vocabulary
/// - The solver cannot provide a next guess
pub fn solve_word<L: CandidateLister + Clone + Send + Sync>(
    solver: &mut EntropySolver<L>,
    target: &str,
    word_length: usize,
    max_guesses: usize,
    opening: Option<&Word>,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(target, word_length)?;

    solver.reset();
    if !solver.get_possible_words().contains(&target) {
        return Err(SolveError::UnknownTarget(target.to_string()));
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 1..=max_guesses {
        let possible_words = solver.get_possible_words();
        let candidates_before = possible_words.len();
        let only_word = if candidates_before == 1 {
            possible_words.iter().next().cloned()
        } else {
            None
        };

        let (guess, entropy) = match (turn, opening, only_word) {
            (1, Some(opening), _) => (opening.clone(), None),
            (_, _, Some(word)) => (word, None),
            _ => {
                let (word, entropy) = solver.get_next_guess()?;
                (word, Some(entropy))
            }
        };

        let clues = simulate_clues(&guess, &target);
        solver.add_clues(&clues);
        let candidates_after = solver.get_possible_words().len();
        debug!("Turn {turn}: {guess} leaves {candidates_after} of {candidates_before} words");

        let solved = guess == target;
        guesses.push(GuessStep {
            word: guess,
            clues,
            candidates_before,
            candidates_after,
            entropy,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    // Failed to solve
    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}
