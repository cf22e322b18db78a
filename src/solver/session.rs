//! One game of terminal hacking
//!
//! Tracks the working pool and the likeness responses observed so far.

use super::strategy::Strategy;
use crate::core::Word;
use thiserror::Error;

/// One guess and the likeness the terminal reported for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub likeness: usize,
}

/// What a recorded response means for the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Likeness equals the word length: the guess was the password
    Solved(Word),
    /// Exactly one candidate is left
    Deduced(Word),
    /// This many candidates remain
    Narrowed(usize),
    /// No candidate fits every response; some likeness was misreported
    Contradiction,
}

/// Errors from recording responses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("likeness {likeness} is out of range for {guess} (0..={len})")]
    LikenessOutOfRange {
        guess: String,
        likeness: usize,
        len: usize,
    },
    #[error("{guess} has {actual} letters but the candidates have {expected}")]
    LengthMismatch {
        guess: String,
        actual: usize,
        expected: usize,
    },
    #[error("the game is over, start a new one")]
    Finished,
    #[error("nothing to undo")]
    NothingToUndo,
}

/// Game state driven by a strategy
///
/// Coordinates suggestions and narrowing; never touches the caller's word list.
pub struct Session<S: Strategy> {
    strategy: S,
    initial: Vec<Word>,
    pool: Vec<Word>,
    history: Vec<Turn>,
    solved: bool,
}

impl<S: Strategy> Session<S> {
    /// Start a game over the given candidates
    pub fn new(strategy: S, candidates: Vec<Word>) -> Self {
        Self {
            strategy,
            pool: candidates.clone(),
            initial: candidates,
            history: Vec::new(),
            solved: false,
        }
    }

    /// Discard all progress and play again over new candidates
    pub fn restart(&mut self, candidates: Vec<Word>) {
        self.pool.clone_from(&candidates);
        self.initial = candidates;
        self.history.clear();
        self.solved = false;
    }

    /// The strategy in use
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Candidates still consistent with every response
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// Number of candidates still consistent with every response
    pub fn remaining_candidates(&self) -> usize {
        self.pool.len()
    }

    /// Turns played so far
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Solved, or no candidate left
    pub fn is_finished(&self) -> bool {
        self.solved || self.pool.is_empty()
    }

    /// The strategy's pick for the current pool
    ///
    /// Returns `None` once the game is finished.
    pub fn suggest(&self) -> Option<Word> {
        if self.is_finished() {
            return None;
        }

        self.strategy.best_guess(&self.pool)
    }

    /// Record the terminal's likeness response to `guess`
    ///
    /// The guess does not have to come from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The game is already finished
    /// - The guess length differs from the candidates'
    /// - The likeness exceeds the guess length
    pub fn record(&mut self, guess: Word, likeness: usize) -> Result<Outcome, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }

        match self.pool.first().map(Word::len) {
            Some(expected) if expected != guess.len() => {
                return Err(SessionError::LengthMismatch {
                    guess: guess.to_string(),
                    actual: guess.len(),
                    expected,
                });
            }
            _ => {}
        }

        if likeness > guess.len() {
            return Err(SessionError::LikenessOutOfRange {
                guess: guess.to_string(),
                likeness,
                len: guess.len(),
            });
        }

        let outcome = self.apply(&guess, likeness);
        self.history.push(Turn { guess, likeness });

        match &outcome {
            Outcome::Solved(word) => log::info!("password found: {word}"),
            Outcome::Contradiction => log::warn!("no candidates fit the responses so far"),
            Outcome::Deduced(word) => log::debug!("only {word} remains"),
            Outcome::Narrowed(count) => log::debug!("{count} candidates remain"),
        }

        Ok(outcome)
    }

    /// Take back the last recorded turn
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NothingToUndo` if no turn was recorded.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        self.history.pop().ok_or(SessionError::NothingToUndo)?;

        self.pool.clone_from(&self.initial);
        self.solved = false;

        let history = std::mem::take(&mut self.history);
        for turn in &history {
            self.apply(&turn.guess, turn.likeness);
        }
        self.history = history;

        Ok(())
    }

    fn apply(&mut self, guess: &Word, likeness: usize) -> Outcome {
        if likeness == guess.len() {
            self.solved = true;
            self.pool = vec![guess.clone()];
            return Outcome::Solved(guess.clone());
        }

        self.pool = self.strategy.narrow(&self.pool, guess, likeness);

        match self.pool.as_slice() {
            [] => Outcome::Contradiction,
            [only] => Outcome::Deduced(only.clone()),
            pool => Outcome::Narrowed(pool.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::TieBreakerStrategy;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn session() -> Session<TieBreakerStrategy> {
        Session::new(
            TieBreakerStrategy,
            words(&["TERMS", "TEXAS", "TIRES", "TANKS"]),
        )
    }

    #[test]
    fn suggest_uses_strategy() {
        let session = session();
        assert_eq!(session.suggest(), Some(word("TERMS")));
        assert_eq!(session.remaining_candidates(), 4);
    }

    #[test]
    fn record_narrows_to_single_candidate() {
        let mut session = session();

        let outcome = session.record(word("TERMS"), 2).unwrap();
        assert_eq!(outcome, Outcome::Deduced(word("TANKS")));
        assert_eq!(session.pool(), words(&["TANKS"]).as_slice());
        assert_eq!(session.suggest(), Some(word("TANKS")));
        assert!(!session.is_finished());
    }

    #[test]
    fn record_narrows_to_several() {
        let mut session = session();

        let outcome = session.record(word("TERMS"), 3).unwrap();
        assert_eq!(outcome, Outcome::Narrowed(2));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn full_likeness_solves() {
        let mut session = session();

        let outcome = session.record(word("TIRES"), 5).unwrap();
        assert_eq!(outcome, Outcome::Solved(word("TIRES")));
        assert!(session.is_finished());
        assert!(session.suggest().is_none());
        assert_eq!(
            session.record(word("TERMS"), 1),
            Err(SessionError::Finished)
        );
    }

    #[test]
    fn inconsistent_responses_contradict() {
        let mut session = session();

        let outcome = session.record(word("TERMS"), 4).unwrap();
        assert_eq!(outcome, Outcome::Contradiction);
        assert!(session.is_finished());
        assert!(session.suggest().is_none());
    }

    #[test]
    fn likeness_out_of_range_rejected() {
        let mut session = session();

        let err = session.record(word("TERMS"), 6).unwrap_err();
        assert!(matches!(err, SessionError::LikenessOutOfRange { likeness: 6, len: 5, .. }));
        assert!(session.history().is_empty());
    }

    #[test]
    fn length_mismatch_rejected() {
        let mut session = session();

        let err = session.record(word("TERM"), 1).unwrap_err();
        assert_eq!(
            err,
            SessionError::LengthMismatch {
                guess: "TERM".to_string(),
                actual: 4,
                expected: 5
            }
        );
    }

    #[test]
    fn undo_restores_previous_pool() {
        let mut session = session();

        session.record(word("TERMS"), 3).unwrap();
        session.record(word("TEXAS"), 2).unwrap();
        assert_eq!(session.pool(), words(&["TIRES"]).as_slice());

        session.undo().unwrap();
        assert_eq!(session.pool(), words(&["TEXAS", "TIRES"]).as_slice());
        assert_eq!(session.history().len(), 1);

        session.undo().unwrap();
        assert_eq!(session.remaining_candidates(), 4);
        assert_eq!(session.undo(), Err(SessionError::NothingToUndo));
    }

    #[test]
    fn undo_reopens_contradiction() {
        let mut session = session();

        session.record(word("TERMS"), 4).unwrap();
        assert!(session.is_finished());

        session.undo().unwrap();
        assert!(!session.is_finished());
        assert_eq!(session.remaining_candidates(), 4);
    }

    #[test]
    fn restart_replaces_candidates() {
        let mut session = session();
        session.record(word("TERMS"), 5).unwrap();

        session.restart(words(&["SALES", "SALTY", "SAUCE", "SAVES"]));
        assert!(session.history().is_empty());
        assert!(!session.is_finished());
        assert_eq!(session.suggest(), Some(word("SALES")));
    }

    #[test]
    fn caller_pool_untouched() {
        let candidates = words(&["TERMS", "TEXAS", "TIRES", "TANKS"]);
        let mut session = Session::new(TieBreakerStrategy, candidates.clone());

        session.record(word("TERMS"), 2).unwrap();
        assert_eq!(candidates.len(), 4);
        assert_eq!(session.strategy().name(), "tie-breaker");
    }
}
