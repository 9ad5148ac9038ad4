//! Word list loading utilities
//!
//! Provides functions to load a vocabulary of fixed-length words from text.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of `word_length` characters from a file
///
/// Returns the valid words in file order, skipping blank lines, invalid entries
/// and duplicates.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_clues::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content, word_length))
}

/// Parse newline-separated words, keeping the first occurrence of each valid word
///
/// # Examples
/// ```
/// use wordle_clues::wordlists::words_from_lines;
///
/// let words = words_from_lines("crane\nslate\n\ntoolong\nCRANE\n", 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_lines(content: &str, word_length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line, word_length).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if skipped > 0 {
        debug!("Skipped {skipped} entries that are not {word_length}-letter words");
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_converts_valid_words() {
        let words = words_from_lines("crane\nslate\nirate\n", 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_lines_skips_invalid() {
        let words = words_from_lines("crane\ntoolong\nabc\nsl4te\nslate", 5);

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_lines_trims_and_normalizes() {
        let words = words_from_lines("  Crane \r\n\n\nSLATE\n", 5);
        assert_eq!(words, vec![Word::from("crane"), Word::from("slate")]);
    }

    #[test]
    fn words_from_lines_removes_duplicates() {
        let words = words_from_lines("crane\nslate\ncrane\nCRANE", 5);
        assert_eq!(words, vec![Word::from("crane"), Word::from("slate")]);
    }

    #[test]
    fn words_from_lines_other_lengths() {
        let words = words_from_lines("abc\ndef\nabcd", 3);
        assert_eq!(words, vec![Word::from("abc"), Word::from("def")]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(words_from_lines("", 5).is_empty());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("does/not/exist.txt", 5).is_err());
    }
}
