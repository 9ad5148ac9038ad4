//! Formatting utilities for terminal output

use crate::core::{Clue, Color};
use colored::Colorize;

/// Render a guess as its letters on coloured tiles
#[must_use]
pub fn colored_clues(clues: &[Clue]) -> String {
    clues
        .iter()
        .map(|clue| {
            let tile = format!(" {} ", clue.character().to_uppercase());
            match clue.color() {
                Color::Correct => tile.black().on_green().bold().to_string(),
                Color::Present => tile.black().on_yellow().bold().to_string(),
                Color::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
