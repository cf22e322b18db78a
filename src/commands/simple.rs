//! Simple interactive CLI mode
//!
//! Text-based assistant: collect the words shown on the terminal, suggest a
//! guess, read back the likeness, repeat.

use super::CommandError;
use crate::core::Word;
use crate::solver::{Outcome, Session, Strategy};
use crate::wordlists::loader::{parse_words, same_length_pool};
use colored::Colorize;
use std::io::{BufRead, Write};

/// One line of player input during a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    New,
    Undo,
    /// Likeness for the suggested guess
    Likeness(usize),
    /// A different word was entered, with its likeness
    Guess(String, usize),
}

impl Command {
    /// Parse a line of input; `None` when it is not understood
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Some(Self::Quit),
            "new" | "n" => return Some(Self::New),
            "undo" | "u" => return Some(Self::Undo),
            _ => {}
        }

        let mut parts = input.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(likeness), None, None) => likeness.parse().ok().map(Self::Likeness),
            (Some(word), Some(likeness), None) => likeness
                .parse()
                .ok()
                .map(|likeness| Self::Guess(word.to_string(), likeness)),
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// When `candidates` is empty the words are read from `input` first.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S, R, W>(
    strategy: S,
    candidates: Vec<Word>,
    mut input: R,
    mut out: W,
) -> Result<(), CommandError>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "═".repeat(62).bright_green())?;
    writeln!(
        out,
        " {} ",
        "TERMINAL PASSWORD ASSISTANT".bright_green().bold()
    )?;
    writeln!(out, "{}", "═".repeat(62).bright_green())?;
    writeln!(out, "Strategy: {}", strategy.name())?;
    writeln!(
        out,
        "After each guess, enter the likeness the terminal reports."
    )?;
    writeln!(
        out,
        "Type a number for the suggested word, or WORD NUMBER for another word."
    )?;
    writeln!(out, "Commands: 'undo', 'new', 'quit'\n")?;

    let candidates = if candidates.is_empty() {
        match collect_words(&mut input, &mut out)? {
            Some(words) => words,
            None => return Ok(()),
        }
    } else {
        same_length_pool(candidates)
    };

    let mut session = Session::new(strategy, candidates);

    loop {
        if session.is_finished() {
            if !session.pool().is_empty() {
                writeln!(out, "Play again? (yes/no)")?;
                let again = read_line(&mut input)?.unwrap_or_default().to_lowercase();
                if !matches!(again.as_str(), "yes" | "y") {
                    writeln!(out, "Goodbye.")?;
                    return Ok(());
                }

                let Some(words) = collect_words(&mut input, &mut out)? else {
                    return Ok(());
                };
                session.restart(words);
                continue;
            }

            writeln!(
                out,
                "{}",
                "No candidates fit the responses. A likeness may be wrong.".red()
            )?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.")?;
        } else {
            show_turn(&session, &mut out)?;
        }

        let suggestion = session.suggest();
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };

        let (guess, likeness) = match Command::parse(&line) {
            Some(Command::Quit) => {
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }
            Some(Command::New) => {
                let Some(words) = collect_words(&mut input, &mut out)? else {
                    return Ok(());
                };
                session.restart(words);
                continue;
            }
            Some(Command::Undo) => {
                match session.undo() {
                    Ok(()) => writeln!(out, "Undone.")?,
                    Err(e) => writeln!(out, "{e}")?,
                }
                continue;
            }
            Some(Command::Likeness(likeness)) => match suggestion {
                Some(guess) => (guess, likeness),
                None => {
                    writeln!(out, "No suggestion to apply that to.")?;
                    continue;
                }
            },
            Some(Command::Guess(text, likeness)) => match Word::new(text) {
                Ok(guess) => (guess, likeness),
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            },
            None => {
                writeln!(out, "Not understood. Enter a likeness, WORD LIKENESS, or a command.")?;
                continue;
            }
        };

        match session.record(guess, likeness) {
            Ok(Outcome::Solved(word)) => {
                writeln!(
                    out,
                    "\n{} {}",
                    "Password accepted:".green().bold(),
                    word.to_string().bright_white().bold()
                )?;
                writeln!(
                    out,
                    "Solved in {} {}",
                    session.history().len(),
                    if session.history().len() == 1 {
                        "guess"
                    } else {
                        "guesses"
                    }
                )?;
            }
            Ok(Outcome::Deduced(word)) => {
                writeln!(
                    out,
                    "The password must be {}",
                    word.to_string().bright_yellow().bold()
                )?;
            }
            Ok(Outcome::Narrowed(count)) => writeln!(out, "{count} candidates remain")?,
            Ok(Outcome::Contradiction) => {}
            Err(e) => writeln!(out, "{}", e.to_string().red())?,
        }
    }
}

fn show_turn<S: Strategy, W: Write>(session: &Session<S>, out: &mut W) -> std::io::Result<()> {
    let remaining = session.remaining_candidates();

    writeln!(out, "{}", "─".repeat(62).bright_black())?;
    writeln!(
        out,
        "Turn {}: {remaining} candidates remaining",
        session.history().len() + 1
    )?;

    if remaining <= 10 {
        let list: Vec<&str> = session.pool().iter().map(Word::text).collect();
        writeln!(out, "  {}", list.join(" "))?;
    }

    if let Some(guess) = session.suggest() {
        write!(
            out,
            "Suggested guess: {}",
            guess.to_string().bright_yellow().bold()
        )?;
        if remaining > 1 {
            let info = session.strategy().score(&guess, session.pool());
            write!(
                out,
                "  ({} outcomes, worst case {})",
                info.information_value(),
                info.worst_case()
            )?;
        }
        writeln!(out)?;
    }

    write!(out, "Likeness> ")?;
    out.flush()
}

/// Read candidate words until a blank line; `None` on end of input
fn collect_words<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<Vec<Word>>, CommandError> {
    loop {
        writeln!(out, "Enter the candidate words (blank line to finish):")?;

        let mut text = String::new();
        let mut reached_end = false;
        loop {
            match read_line(input)? {
                Some(line) if line.is_empty() => break,
                Some(line) => {
                    text.push_str(&line);
                    text.push('\n');
                }
                None => {
                    reached_end = true;
                    break;
                }
            }
        }

        let words = same_length_pool(parse_words(&text));
        if !words.is_empty() {
            writeln!(out, "{} candidates loaded.", words.len())?;
            return Ok(Some(words));
        }

        if reached_end {
            return Ok(None);
        }
        writeln!(out, "No valid words entered.")?;
    }
}

/// Next trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
