//! Wordle Clues
//!
//! Tracks the words consistent with Wordle clues through per-position inverted
//! indices, and picks the next guess by expected remaining entropy.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clues::core::{Word, parse_feedback, word_set};
//! use wordle_clues::index::{ClueCache, ConstraintIndex};
//! use wordle_clues::solver::{EntropySolver, SearchSpace};
//!
//! let words = ["hello", "world", "happy", "apple", "grape", "melon"];
//! let index = ConstraintIndex::new(words.map(Word::from), 5, ClueCache::default());
//! let mut solver = EntropySolver::new(index, SearchSpace::new(word_set(words), None));
//!
//! // GRAPE: only the E is in the word, at another position
//! solver.add_clues(&parse_feedback("grape", "ggggy", 5).unwrap());
//! assert_eq!(*solver.get_possible_words(), word_set(["hello", "melon"]));
//!
//! let next = solver.get_next_word().unwrap();
//! println!("Next guess: {next}");
//! ```

// Core domain types
pub mod core;

// Clue indexing and caching
pub mod index;

// Guess selection
pub mod solver;

// Offline word grouping
pub mod grouping;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Shared settings
pub mod config;

// Logger setup
pub mod logging;
