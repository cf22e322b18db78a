//! Password cracking simulation
//!
//! Plays a known password against the strategy and records every turn.

use super::CommandError;
use crate::core::Word;
use crate::solver::{Outcome, Session, Strategy};

/// Attempts before the terminal locks out
pub const DEFAULT_ATTEMPTS: usize = 4;

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: DEFAULT_ATTEMPTS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub secret: Word,
    pub strategy: &'static str,
    pub steps: Vec<GuessStep>,
    pub success: bool,
    pub contradiction: bool,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Word,
    pub likeness: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub information_value: Option<usize>,
    pub worst_case: Option<usize>,
}

/// Solve a known password using the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid word
/// - The secret is not one of the candidates
pub fn solve_word<S: Strategy>(
    config: &SolveConfig,
    pool: &[Word],
    strategy: &S,
) -> Result<SolveResult, CommandError> {
    let secret = Word::new(config.secret.as_str())?;

    if !pool.contains(&secret) {
        return Err(CommandError::NotInPool(secret.to_string()));
    }

    play(&secret, pool, strategy, config.max_guesses)
}

/// Drive a session until the secret is hit, the pool empties, or attempts run out
pub(crate) fn play<S: Strategy>(
    secret: &Word,
    pool: &[Word],
    strategy: &S,
    max_guesses: usize,
) -> Result<SolveResult, CommandError> {
    let mut session = Session::new(strategy, pool.to_vec());
    let mut steps = Vec::new();
    let mut success = false;
    let mut contradiction = false;

    for _ in 0..max_guesses {
        let candidates_before = session.remaining_candidates();
        let Some(guess) = session.suggest() else {
            break;
        };

        // Only score while there is still something to distinguish
        let (information_value, worst_case) = if candidates_before > 1 {
            let info = strategy.score(&guess, session.pool());
            (Some(info.information_value()), Some(info.worst_case()))
        } else {
            (None, None)
        };

        let likeness = guess.match_count(secret);
        let outcome = session.record(guess.clone(), likeness)?;

        steps.push(GuessStep {
            guess,
            likeness,
            candidates_before,
            candidates_after: session.remaining_candidates(),
            information_value,
            worst_case,
        });

        match outcome {
            Outcome::Solved(_) => {
                success = true;
                break;
            }
            Outcome::Contradiction => {
                contradiction = true;
                break;
            }
            Outcome::Deduced(_) | Outcome::Narrowed(_) => {}
        }
    }

    Ok(SolveResult {
        secret: secret.clone(),
        strategy: strategy.name(),
        steps,
        success,
        contradiction,
    })
}
