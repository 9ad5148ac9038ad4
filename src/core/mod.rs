//! Core domain types for Wordle
//!
//! This module contains the value types shared by the index and the solver.
//! All types here are pure, immutable and testable in isolation.

mod clue;
mod word;

pub use clue::{Clue, ClueError, Color, clues_to_emoji, parse_feedback, simulate_clues};
pub use word::{Word, WordError, WordSet, word_set};
