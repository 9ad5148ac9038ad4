//! Benchmark command
//!
//! Tests solver performance across a sample of target words.

use super::solve::{SolveError, solve_word};
use crate::core::Word;
use crate::index::CandidateLister;
use crate::solver::EntropySolver;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of solved targets
    pub distribution: BTreeMap<usize, usize>,
    /// Targets not solved within the guess limit
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` distinct targets from `words`
///
/// A `seed` makes the sample reproducible.
#[must_use]
pub fn sample_targets(words: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let count = count.min(words.len());
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            words.choose_multiple(&mut rng, count).cloned().collect()
        }
        None => words.choose_multiple(&mut rand::rng(), count).cloned().collect(),
    }
}

/// Run benchmark on a set of target words
///
/// If `opening` is provided, it is used as the first guess of every game.
/// Averages and extremes are taken over the solved targets.
///
/// # Errors
///
/// Returns the first error raised while solving a target.
pub fn run_benchmark<L: CandidateLister + Clone + Send + Sync>(
    solver: &mut EntropySolver<L>,
    target_words: &[Word],
    word_length: usize,
    max_guesses: usize,
    opening: Option<&Word>,
    show_progress: bool,
) -> Result<BenchmarkResult, SolveError> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    let progress = progress_bar(target_words.len(), show_progress);

    for target in target_words {
        progress.set_message(target.text().to_uppercase());
        let result = solve_word(solver, target.text(), word_length, max_guesses, opening)?;
        progress.inc(1);

        if !result.success {
            warn!("Failed to solve {target} in {max_guesses} guesses");
            failures.push(target.clone());
            continue;
        }

        let guesses = result.guesses.len();
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses_seen = max_guesses_seen.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_words = target_words.len();
    let solved = total_words - failures.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::word_set;
    use crate::index::{ClueCache, ConstraintIndex};
    use crate::solver::SearchSpace;

    const WORDS: [&str; 12] = [
        "hello", "world", "happy", "apple", "grape", "melon", "peach", "arise", "awake", "alive",
        "other", "green",
    ];

    fn setup_solver() -> EntropySolver<ConstraintIndex> {
        let index = ConstraintIndex::new(WORDS.map(Word::from), 5, ClueCache::default());
        EntropySolver::new(index, SearchSpace::new(word_set(WORDS), None))
    }

    fn targets(list: &[&str]) -> Vec<Word> {
        list.iter().map(|&w| Word::from(w)).collect()
    }

    #[test]
    fn benchmark_runs() {
        let mut solver = setup_solver();
        let result =
            run_benchmark(&mut solver, &targets(&["melon", "hello", "grape"]), 5, 6, None, false)
                .unwrap();

        assert_eq!(result.total_words, 3);
        assert_eq!(result.solved, 3);
        assert!(result.failures.is_empty());
        assert_eq!(result.min_guesses, 1);
        assert!(result.max_guesses <= 6);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let mut solver = setup_solver();
        let words = targets(&WORDS);
        let result = run_benchmark(&mut solver, &words, 5, 6, None, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failures.len(), result.total_words);
    }

    #[test]
    fn benchmark_counts_failures() {
        let mut solver = setup_solver();
        let opening = Word::from("world");
        let result =
            run_benchmark(&mut solver, &targets(&["hello", "world"]), 5, 1, Some(&opening), false)
                .unwrap();

        assert_eq!(result.solved, 1);
        assert_eq!(result.failures, targets(&["hello"]));
        assert_eq!(result.distribution.get(&1), Some(&1));
    }

    #[test]
    fn benchmark_empty_word_list() {
        let mut solver = setup_solver();
        let result = run_benchmark(&mut solver, &[], 5, 6, None, false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_unknown_target_fails() {
        let mut solver = setup_solver();
        assert!(run_benchmark(&mut solver, &targets(&["zzzzz"]), 5, 6, None, false).is_err());
    }

    #[test]
    fn sample_targets_is_seedable() {
        let words = targets(&WORDS);
        let first = sample_targets(&words, 5, Some(7));
        let second = sample_targets(&words, 5, Some(7));

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
        assert_eq!(word_set(first.iter().map(Word::text)).len(), 5);
    }

    #[test]
    fn sample_targets_caps_at_vocabulary() {
        let words = targets(&["hello", "world"]);
        assert_eq!(sample_targets(&words, 10, None).len(), 2);
        assert!(sample_targets(&words, 0, Some(1)).is_empty());
    }
}
