//! Command implementations

pub mod benchmark;
pub mod interactive;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use interactive::run_interactive;
pub use solve::{GuessStep, SolveError, SolveResult, solve_word};

use crate::config::GameConfig;
use crate::core::{Word, WordSet};
use crate::grouping::{covers_vocabulary, group_by_overlapping_characters};
use crate::index::{ClueCache, ConstraintIndex};
use crate::solver::{EntropySolver, SearchSpace};
use log::{debug, warn};
use std::time::Instant;

/// Build an entropy solver over `words` as configured
///
/// Representative groups are computed up front unless disabled, or unless the
/// vocabulary is small enough to always be searched in full.
#[must_use]
pub fn build_solver(words: &[Word], config: &GameConfig) -> EntropySolver<ConstraintIndex> {
    let all_words: WordSet = words.iter().cloned().collect();

    let groups = (config.use_groups && all_words.len() > config.max_search_size).then(|| {
        let start = Instant::now();
        let groups = group_by_overlapping_characters(words, config.max_groups, config.iou_threshold);
        debug!(
            "Built {} groups over {} words in {:.2}s",
            groups.len(),
            words.len(),
            start.elapsed().as_secs_f64()
        );
        groups
    });

    let groups = groups.filter(|groups| {
        let covered = !groups.is_empty() && covers_vocabulary(groups, &all_words);
        if !covered {
            warn!("Word groups do not cover the vocabulary, searching all words instead");
        }
        covered
    });

    let index = ConstraintIndex::new(words.iter().cloned(), config.word_length, ClueCache::default());
    let search_space =
        SearchSpace::new(all_words, groups).with_max_search_size(config.max_search_size);

    EntropySolver::new(index, search_space).with_progress(config.show_progress)
}
