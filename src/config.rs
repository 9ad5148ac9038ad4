//! Game and solver configuration defaults

use crate::solver::DEFAULT_MAX_SEARCH_SIZE;

/// Settings shared by the commands
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Number of characters per word
    pub word_length: usize,
    /// Maximum number of representative groups to build
    pub max_groups: usize,
    /// Minimum character IOU for a word to join a representative's group
    pub iou_threshold: f64,
    /// Search the full vocabulary when at most this many words remain
    pub max_search_size: usize,
    /// Guesses allowed before a simulated game counts as lost
    pub max_guesses: usize,
    /// Build representative groups at all
    pub use_groups: bool,
    /// Show progress bars during candidate evaluation
    pub show_progress: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_groups: 100,
            iou_threshold: 0.7,
            max_search_size: DEFAULT_MAX_SEARCH_SIZE,
            max_guesses: 6,
            use_groups: true,
            show_progress: false,
        }
    }
}
