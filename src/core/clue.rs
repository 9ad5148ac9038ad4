//! Wordle clues
//!
//! A clue is the feedback for a single character of a guess:
//! - Absent: the character is not in the word (grey)
//! - Present: the character is in the word, at another position (yellow)
//! - Correct: the character is at this position (green)

use super::{Word, WordError};
use std::fmt;

/// Derived feedback color of a clue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Absent,
    Present,
    Correct,
}

impl Color {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'g'/'G'/⬜ for grey (absent)
    /// - 'y'/'Y'/🟨 for yellow (present)
    /// - 'c'/'C'/🟩 for correct
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' | '⬜' => Some(Self::Absent),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'c' | 'C' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Feedback symbol used by the driver input format
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'g',
            Self::Present => 'y',
            Self::Correct => 'c',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// One character-position observation from a guess
///
/// Invariant: a clue in the correct position is always in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clue {
    position: usize,
    character: char,
    in_word: bool,
    correct_position: bool,
}

impl Clue {
    /// Create a clue from its raw flags
    ///
    /// A clue in the correct position is recorded as in the word even if
    /// `in_word` is false.
    #[must_use]
    pub const fn new(position: usize, character: char, in_word: bool, correct_position: bool) -> Self {
        Self {
            position,
            character,
            in_word: in_word || correct_position,
            correct_position,
        }
    }

    /// Create a clue from a derived color
    #[must_use]
    pub const fn with_color(position: usize, character: char, color: Color) -> Self {
        match color {
            Color::Correct => Self::new(position, character, true, true),
            Color::Present => Self::new(position, character, true, false),
            Color::Absent => Self::new(position, character, false, false),
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn character(self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn in_word(self) -> bool {
        self.in_word
    }

    #[inline]
    #[must_use]
    pub const fn correct_position(self) -> bool {
        self.correct_position
    }

    /// Derived color: correct wins over present, present over absent
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if self.correct_position {
            Color::Correct
        } else if self.in_word {
            Color::Present
        } else {
            Color::Absent
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.position, self.character, self.color().symbol())
    }
}

/// Error type for malformed guess/feedback input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClueError {
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("Feedback must be exactly {expected} symbols, got {got}")]
    FeedbackLength { expected: usize, got: usize },
    #[error("Invalid feedback symbol '{symbol}' at position {position} (use g, y or c)")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Parse a guess and its feedback string into one clue per position
///
/// # Errors
/// Returns `ClueError` if the guess is not a valid word of `word_length`
/// characters, or the feedback does not have `word_length` valid symbols.
///
/// # Examples
/// ```
/// use wordle_clues::core::{Color, parse_feedback};
///
/// let clues = parse_feedback("crane", "ygggc", 5).unwrap();
/// assert_eq!(clues.len(), 5);
/// assert_eq!(clues[0].color(), Color::Present);
/// assert_eq!(clues[4].color(), Color::Correct);
///
/// assert!(parse_feedback("crane", "ygg", 5).is_err());
/// ```
pub fn parse_feedback(guess: &str, feedback: &str, word_length: usize) -> Result<Vec<Clue>, ClueError> {
    let guess = Word::new(guess.trim(), word_length)?;

    let symbols: Vec<char> = feedback.trim().chars().collect();
    if symbols.len() != word_length {
        return Err(ClueError::FeedbackLength {
            expected: word_length,
            got: symbols.len(),
        });
    }

    guess
        .chars()
        .zip(symbols)
        .enumerate()
        .map(|(position, (character, symbol))| {
            Color::from_symbol(symbol)
                .map(|color| Clue::with_color(position, character, color))
                .ok_or(ClueError::InvalidSymbol { symbol, position })
        })
        .collect()
}

/// Clues that `guess` would receive if `target` were the answer
///
/// A character is correct if it matches the target at that index, present if it
/// appears anywhere else in the target, absent otherwise. Repeated letters are
/// not budgeted against the target's letter counts.
#[must_use]
pub fn simulate_clues(guess: &Word, target: &Word) -> Vec<Clue> {
    let target_chars: Vec<char> = target.chars().collect();

    guess
        .chars()
        .enumerate()
        .map(|(position, character)| {
            let color = if target_chars.get(position) == Some(&character) {
                Color::Correct
            } else if target_chars.contains(&character) {
                Color::Present
            } else {
                Color::Absent
            };
            Clue::with_color(position, character, color)
        })
        .collect()
}

/// Render clues as an emoji string like "🟩🟨⬜⬜🟩"
#[must_use]
pub fn clues_to_emoji(clues: &[Clue]) -> String {
    clues.iter().map(|clue| clue.color().emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_derivation() {
        assert_eq!(Clue::new(0, 'a', true, true).color(), Color::Correct);
        assert_eq!(Clue::new(0, 'a', true, false).color(), Color::Present);
        assert_eq!(Clue::new(0, 'a', false, false).color(), Color::Absent);
    }

    #[test]
    fn correct_position_implies_in_word() {
        let clue = Clue::new(1, 'q', false, true);
        assert!(clue.in_word());
        assert_eq!(clue, Clue::new(1, 'q', true, true));
        assert_eq!(clue.color(), Color::Correct);
    }

    #[test]
    fn with_color_sets_flags() {
        let correct = Clue::with_color(2, 'x', Color::Correct);
        assert!(correct.in_word() && correct.correct_position());

        let present = Clue::with_color(2, 'x', Color::Present);
        assert!(present.in_word() && !present.correct_position());

        let absent = Clue::with_color(2, 'x', Color::Absent);
        assert!(!absent.in_word() && !absent.correct_position());
    }

    #[test]
    fn parse_feedback_valid() {
        let clues = parse_feedback("hello", "cyggc", 5).unwrap();
        assert_eq!(
            clues,
            vec![
                Clue::new(0, 'h', true, true),
                Clue::new(1, 'e', true, false),
                Clue::new(2, 'l', false, false),
                Clue::new(3, 'l', false, false),
                Clue::new(4, 'o', true, true),
            ]
        );
    }

    #[test]
    fn parse_feedback_accepts_emoji_and_uppercase() {
        let plain = parse_feedback("crane", "cyggc", 5).unwrap();
        let emoji = parse_feedback("CRANE", "🟩🟨⬜⬜🟩", 5).unwrap();
        assert_eq!(plain, emoji);
    }

    #[test]
    fn parse_feedback_wrong_word_length() {
        assert!(matches!(
            parse_feedback("cranes", "cyggc", 5),
            Err(ClueError::InvalidGuess(WordError::InvalidLength { expected: 5, got: 6 }))
        ));
    }

    #[test]
    fn parse_feedback_wrong_feedback_length() {
        assert_eq!(
            parse_feedback("crane", "cyg", 5),
            Err(ClueError::FeedbackLength {
                expected: 5,
                got: 3
            })
        );
    }

    #[test]
    fn parse_feedback_invalid_symbol() {
        assert_eq!(
            parse_feedback("crane", "cyxgc", 5),
            Err(ClueError::InvalidSymbol {
                symbol: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn simulate_all_correct() {
        let word = Word::from("crane");
        let clues = simulate_clues(&word, &word);
        assert!(clues.iter().all(|c| c.color() == Color::Correct));
    }

    #[test]
    fn simulate_mixed() {
        // CRANE vs REACT: c present, r present, a correct, n absent, e present
        let clues = simulate_clues(&Word::from("crane"), &Word::from("react"));
        let colors: Vec<Color> = clues.iter().map(|c| c.color()).collect();
        assert_eq!(
            colors,
            vec![
                Color::Present,
                Color::Present,
                Color::Correct,
                Color::Absent,
                Color::Present
            ]
        );
    }

    #[test]
    fn simulate_repeated_letters_not_budgeted() {
        // Both l's in HELLO are present against LEMON even though it has a single l
        let clues = simulate_clues(&Word::from("hello"), &Word::from("lemon"));
        assert_eq!(clues[2].color(), Color::Present);
        assert_eq!(clues[3].color(), Color::Present);
        assert_eq!(clues[1].color(), Color::Correct);
    }

    #[test]
    fn emoji_rendering() {
        let clues = parse_feedback("crane", "cyggc", 5).unwrap();
        assert_eq!(clues_to_emoji(&clues), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn display_encodes_position_character_color() {
        assert_eq!(Clue::new(3, 'e', true, false).to_string(), "3ey");
    }
}
