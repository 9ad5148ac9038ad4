//! Vocabulary word representation
//!
//! A Word is an immutable, cheaply clonable string of a fixed number of characters.
//! Words are stored in hash sets throughout the index, so cloning shares the text.

use rustc_hash::FxHashSet;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Set of words, the currency of every index and solver operation
pub type WordSet = FxHashSet<Word>;

/// A vocabulary word
///
/// Length is measured in characters, not bytes, so words from alphabets with
/// accented letters index the same way as plain ASCII words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Arc<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} characters, got {got}")]
    InvalidLength { expected: usize, got: usize },
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a validated, lowercased word of exactly `length` characters
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The character count is not `length`
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::Word;
    ///
    /// let word = Word::new("Crane", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let text = text.to_lowercase();

        let count = text.chars().count();
        if count != length {
            return Err(WordError::InvalidLength {
                expected: length,
                got: count,
            });
        }

        if let Some(invalid) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(invalid));
        }

        Ok(Self { text: text.into() })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate over the characters of the word
    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the word contains a specific character
    #[inline]
    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.text.contains(character)
    }

    /// Check whether any character occurs more than once
    #[must_use]
    pub fn has_repeated_characters(&self) -> bool {
        let mut seen = FxHashSet::default();
        !self.chars().all(|c| seen.insert(c))
    }

    /// Set of distinct characters in the word
    #[must_use]
    pub fn distinct_chars(&self) -> FxHashSet<char> {
        self.chars().collect()
    }
}

/// Unchecked conversion, for words that are already known to be valid
impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self { text: text.into() }
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Build a `WordSet` from string slices
///
/// # Examples
/// ```
/// use wordle_clues::core::word_set;
///
/// let words = word_set(["abc", "def", "abc"]);
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("abc"));
/// ```
pub fn word_set<'a>(words: impl IntoIterator<Item = &'a str>) -> WordSet {
    words.into_iter().map(Word::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.char_count(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE", 5).unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE", 5).unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                got: 8
            })
        );
        assert_eq!(
            Word::new("abc", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                got: 3
            })
        );
        assert!(Word::new("abc", 3).is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            Word::new("cran3", 5),
            Err(WordError::InvalidCharacter('3'))
        );
        assert!(Word::new("cran ", 5).is_err()); // Space
        assert!(Word::new("cran!", 5).is_err()); // Punctuation
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        let word = Word::new("niños", 5).unwrap();
        assert_eq!(word.char_count(), 5);
        assert_eq!(word.chars().nth(2), Some('ñ'));
    }

    #[test]
    fn word_contains() {
        let word = Word::from("crane");
        assert!(word.contains('c'));
        assert!(word.contains('e'));
        assert!(!word.contains('z'));
    }

    #[test]
    fn word_repeated_characters() {
        assert!(Word::from("speed").has_repeated_characters());
        assert!(Word::from("aaaaa").has_repeated_characters());
        assert!(!Word::from("crane").has_repeated_characters());
    }

    #[test]
    fn word_set_lookup_by_str() {
        let words = word_set(["hello", "world"]);
        assert!(words.contains("hello"));
        assert!(!words.contains("happy"));
    }

    #[test]
    fn word_display() {
        let word = Word::from("crane");
        assert_eq!(format!("{word}"), "crane");
    }
}
