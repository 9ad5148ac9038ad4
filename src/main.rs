//! Wordle Clues - CLI
//!
//! Wordle assistant that tracks the words consistent with the clues received
//! and suggests the guess expected to leave the fewest of them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_clues::{
    commands::{build_solver, run_benchmark, run_interactive, sample_targets, solve_word},
    config::GameConfig,
    core::Word,
    logging::init_logger,
    output::{print_benchmark_result, print_solve_result},
    solver::DEFAULT_MAX_SEARCH_SIZE,
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_clues",
    about = "Wordle assistant choosing guesses by expected remaining entropy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a newline-separated word list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Number of letters per word
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    word_length: usize,

    /// Search all words once at most this many remain
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_SEARCH_SIZE)]
    max_search_size: usize,

    /// Maximum number of word groups to build
    #[arg(long, global = true, default_value_t = 100)]
    max_groups: usize,

    /// Minimum character overlap (IOU) to join a group
    #[arg(long, global = true, default_value_t = 0.7)]
    iou_threshold: f64,

    /// Always search the whole vocabulary
    #[arg(long, global = true)]
    no_groups: bool,

    /// Opening word to use (play: suggested, solve/benchmark: forced)
    #[arg(short = 'f', long, global = true)]
    first_word: Option<String>,

    /// Show progress bars while scoring candidates
    #[arg(long, global = true)]
    progress: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        target: String,
    },

    /// Benchmark solver performance on random targets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            word_length: self.word_length,
            max_groups: self.max_groups,
            iou_threshold: self.iou_threshold,
            max_search_size: self.max_search_size,
            use_groups: !self.no_groups,
            show_progress: self.progress,
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = cli.config();
    let path = cli
        .wordlist
        .as_ref()
        .context("A word list is required, pass one with --wordlist")?;
    let words = load_from_file(path, config.word_length)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    anyhow::ensure!(
        !words.is_empty(),
        "Word list {} has no {}-letter words",
        path.display(),
        config.word_length
    );
    info!("Loaded {} words from {}", words.len(), path.display());

    let opening = cli
        .first_word
        .as_deref()
        .map(|word| Word::new(word, config.word_length))
        .transpose()
        .context("Invalid first word")?;

    let mut solver = build_solver(&words, &config);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let stdin = io::stdin();
            run_interactive(
                &mut solver,
                config.word_length,
                opening.as_ref(),
                stdin.lock(),
                io::stdout(),
            )?;
        }
        Commands::Solve { target } => {
            let result = solve_word(
                &mut solver,
                &target,
                config.word_length,
                config.max_guesses,
                opening.as_ref(),
            )?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Benchmark { count, seed } => {
            let targets = sample_targets(&words, count, seed);
            println!("Running benchmark on {} random words...", targets.len());

            let result = run_benchmark(
                &mut solver,
                &targets,
                config.word_length,
                config.max_guesses,
                opening.as_ref(),
                config.show_progress,
            )?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
