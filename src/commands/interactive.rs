//! Interactive solving session
//!
//! Text-based loop: the player types each guess and the feedback received,
//! and the solver answers with the remaining words and its next suggestion.

use crate::core::{Clue, Word, clues_to_emoji, parse_feedback};
use crate::index::CandidateLister;
use crate::solver::EntropySolver;
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// Run the interactive session until the word is found, `quit` or end of input
///
/// Each turn reads a guessed word and its feedback (`c` correct, `y` present,
/// `g` absent, or the matching emoji). Malformed input only discards the
/// current turn. `new` starts over and `undo` drops the last turn.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<L, R, W>(
    solver: &mut EntropySolver<L>,
    word_length: usize,
    opening: Option<&Word>,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    L: CandidateLister + Clone + Send + Sync,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", "Wordle assistant".bright_cyan().bold())?;
    writeln!(
        output,
        "Enter each guess, then its feedback: c = correct, y = present, g = absent."
    )?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for a new game, 'undo' to drop the last guess")?;
    if let Some(opening) = opening {
        writeln!(
            output,
            "Suggested opening word: {}",
            opening.text().to_uppercase().bright_yellow().bold()
        )?;
    }

    solver.reset();
    let mut turns: Vec<Vec<Clue>> = Vec::new();

    loop {
        let Some(guess) = prompt(&mut input, &mut output, "Word")? else {
            return Ok(());
        };

        match guess.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(output, "Bye!")?;
                return Ok(());
            }
            "new" | "n" => {
                turns.clear();
                solver.reset();
                writeln!(output, "New game started")?;
                continue;
            }
            "undo" | "u" => {
                if turns.pop().is_some() {
                    solver.reset();
                    for clues in &turns {
                        solver.add_clues(clues);
                    }
                    writeln!(output, "Back to turn {}", turns.len() + 1)?;
                    if report(solver, &mut output)? {
                        return Ok(());
                    }
                } else {
                    writeln!(output, "Nothing to undo")?;
                }
                continue;
            }
            _ => {}
        }

        let Some(feedback) = prompt(&mut input, &mut output, "Clue")? else {
            return Ok(());
        };

        let clues = match parse_feedback(&guess, &feedback, word_length) {
            Ok(clues) => clues,
            Err(e) => {
                writeln!(output, "{} {e}", "Invalid input:".red())?;
                continue;
            }
        };

        debug!("Turn {}: {guess} {feedback}", turns.len() + 1);
        writeln!(output, "{}", clues_to_emoji(&clues))?;
        solver.add_clues(&clues);
        turns.push(clues);

        if report(solver, &mut output)? {
            return Ok(());
        }
    }
}

/// Print a prompt and read one trimmed line, or `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Print the remaining words and the next suggestion
///
/// Returns whether a single word remains, which ends the game.
fn report<L, W>(solver: &mut EntropySolver<L>, output: &mut W) -> io::Result<bool>
where
    L: CandidateLister + Clone + Send + Sync,
    W: Write,
{
    let mut remaining: Vec<Word> = solver.get_possible_words().iter().cloned().collect();
    remaining.sort_unstable();

    match remaining.as_slice() {
        [] => {
            writeln!(
                output,
                "{}",
                "No words match these clues. Type 'undo' to drop the last guess.".red()
            )?;
            return Ok(false);
        }
        [solution] => {
            writeln!(
                output,
                "Solution: {}",
                solution.text().to_uppercase().green().bold()
            )?;
            return Ok(true);
        }
        _ => {}
    }

    let listed: Vec<String> = remaining.iter().map(|word| word.text().to_uppercase()).collect();
    writeln!(output, "Possible words: {}", listed.join(", "))?;
    writeln!(output, "{} possible words remain", remaining.len())?;

    match solver.get_next_guess() {
        Ok((word, entropy)) => writeln!(
            output,
            "Next guess: {} (expected entropy {entropy:.3} bits)",
            word.text().to_uppercase().bright_yellow().bold()
        )?,
        Err(e) => writeln!(output, "{} {e}", "No suggestion:".red())?,
    }
    Ok(false)
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

    fn run(script: &str, opening: Option<&Word>) -> (EntropySolver<ConstraintIndex>, String) {
        let mut solver = setup_solver();
        let mut output = Vec::new();
        run_interactive(&mut solver, 5, opening, script.as_bytes(), &mut output).unwrap();
        (solver, String::from_utf8(output).unwrap())
    }

    #[test]
    fn announces_solution() {
        // HELLO and HAPPY remain after the first turn, HAPPY after the second
        let (mut solver, output) = run("hxxxx\nzzzzz\nhzzzz\ncgggg\nhappy\nccccc\n", None);

        assert!(output.contains("Invalid input"));
        assert!(output.contains("2 possible words remain"));
        assert!(output.contains("HELLO"));
        assert!(output.contains("Solution:"));
        assert_eq!(*solver.get_possible_words(), word_set(["happy"]));
    }

    #[test]
    fn suggests_next_guess() {
        let (_, output) = run("grape\nggggy\n", None);

        assert!(output.contains("2 possible words remain"));
        assert!(output.contains("MELON"));
        assert!(output.contains("Next guess:"));
    }

    #[test]
    fn malformed_feedback_keeps_state() {
        let (mut solver, output) = run("grape\ncc\n", None);

        assert!(output.contains("Invalid input"));
        assert!(solver.clues().is_empty());
        assert_eq!(solver.get_possible_words().len(), WORDS.len());
    }

    #[test]
    fn undo_drops_last_turn() {
        let (mut solver, output) = run("grape\nggggy\nundo\nundo\n", None);

        assert!(output.contains("Back to turn 1"));
        assert!(output.contains("Nothing to undo"));
        assert_eq!(solver.get_possible_words().len(), WORDS.len());
    }

    #[test]
    fn new_game_resets() {
        let (mut solver, output) = run("grape\nggggy\nnew\n", None);

        assert!(output.contains("New game started"));
        assert!(solver.clues().is_empty());
        assert_eq!(solver.get_possible_words().len(), WORDS.len());
    }

    #[test]
    fn solution_ends_the_game() {
        let (solver, output) = run("green\nccccc\nnew\n", None);

        assert!(output.contains("Solution:"));
        assert!(!output.contains("New game started"));
        assert_eq!(solver.clues().len(), 5);
    }

    #[test]
    fn lists_every_remaining_word() {
        // Only GRAPE and GREEN contain a 'g'
        let (_, output) = run("gzzzz\nggggg\n", None);

        assert!(output.contains("10 possible words remain"));
        for word in WORDS.iter().filter(|&&w| w != "grape" && w != "green") {
            assert!(output.contains(&word.to_uppercase()), "{word} not listed");
        }
    }

    #[test]
    fn quit_stops_reading() {
        let (solver, output) = run("quit\ngrape\nggggy\n", None);

        assert!(output.contains("Bye!"));
        assert!(solver.clues().is_empty());
    }

    #[test]
    fn shows_opening_word() {
        let opening = Word::from("arise");
        let (_, output) = run("", Some(&opening));
        assert!(output.contains("ARISE"));
    }

    #[test]
    fn reports_contradictory_clues() {
        let (mut solver, output) = run("zzzzz\ncgggg\n", None);

        assert!(output.contains("No words match"));
        assert!(solver.get_possible_words().is_empty());
    }
}
