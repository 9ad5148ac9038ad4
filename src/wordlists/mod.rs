//! Word lists for Wordle solving
//!
//! Vocabularies are plain text files with one word per line.

pub mod loader;

pub use loader::{load_from_file, words_from_lines};
