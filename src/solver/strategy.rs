//! Guess selection strategies
//!
//! Defines the Strategy trait and the enum used to pick one at runtime.

use super::Level;
use super::selection::{
    BestBucketStrategy, HouseGambitStrategy, RandomGuessStrategy, TieBreakerStrategy,
};
use crate::core::{ScoreInfo, Word};

/// A policy for ranking a pool and picking the next guess
///
/// Every implementation returns `None` / an empty list for an empty pool and
/// the lone word, unscored, for a single-member pool.
pub trait Strategy {
    /// All candidates this strategy considers best, in pool order where stable
    fn best_guesses(&self, pool: &[Word]) -> Vec<Word>;

    /// The candidate to guess next
    fn best_guess(&self, pool: &[Word]) -> Option<Word> {
        self.best_guesses(pool).into_iter().next()
    }

    /// Likeness distribution of `candidate` against `pool`
    fn score(&self, candidate: &Word, pool: &[Word]) -> ScoreInfo {
        crate::core::score(candidate, pool)
    }

    /// Pool members consistent with `likeness` for `guess`
    fn narrow(&self, pool: &[Word], guess: &Word, likeness: usize) -> Vec<Word> {
        super::narrow(pool, guess, likeness)
    }

    /// Short human-readable name
    fn name(&self) -> &'static str;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn best_guesses(&self, pool: &[Word]) -> Vec<Word> {
        (**self).best_guesses(pool)
    }

    fn best_guess(&self, pool: &[Word]) -> Option<Word> {
        (**self).best_guess(pool)
    }

    fn score(&self, candidate: &Word, pool: &[Word]) -> ScoreInfo {
        (**self).score(candidate, pool)
    }

    fn narrow(&self, pool: &[Word], guess: &Word, likeness: usize) -> Vec<Word> {
        (**self).narrow(pool, guess, likeness)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Information value, then worst case; deterministic
    TieBreaker(TieBreakerStrategy),
    /// Information value with a random tie-break (default)
    BestBucket(BestBucketStrategy),
    /// Uniform random pool member
    RandomGuess(RandomGuessStrategy),
    /// Single blind pick
    HouseGambit(HouseGambitStrategy),
}

impl Strategy for StrategyType {
    fn best_guesses(&self, pool: &[Word]) -> Vec<Word> {
        match self {
            Self::TieBreaker(s) => s.best_guesses(pool),
            Self::BestBucket(s) => s.best_guesses(pool),
            Self::RandomGuess(s) => s.best_guesses(pool),
            Self::HouseGambit(s) => s.best_guesses(pool),
        }
    }

    fn best_guess(&self, pool: &[Word]) -> Option<Word> {
        match self {
            Self::TieBreaker(s) => s.best_guess(pool),
            Self::BestBucket(s) => s.best_guess(pool),
            Self::RandomGuess(s) => s.best_guess(pool),
            Self::HouseGambit(s) => s.best_guess(pool),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::TieBreaker(s) => s.name(),
            Self::BestBucket(s) => s.name(),
            Self::RandomGuess(s) => s.name(),
            Self::HouseGambit(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create the strategy registered for a level
    ///
    /// `seed` makes the randomized strategies reproducible; `None` seeds from
    /// the operating system.
    #[must_use]
    pub fn from_level(level: Level, seed: Option<u64>) -> Self {
        match level {
            Level::HouseGambit => Self::HouseGambit(HouseGambitStrategy::from_seed(seed)),
            Level::BestBucket => Self::BestBucket(BestBucketStrategy::from_seed(seed)),
            Level::TieBreaker => Self::TieBreaker(TieBreakerStrategy),
        }
    }

    /// Create strategy from name string
    ///
    /// Supported names: "random" / "baseline" for the unscored baseline, plus
    /// every level number and alias. Defaults to the default level if name is
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("random") || trimmed.eq_ignore_ascii_case("baseline") {
            return Self::RandomGuess(RandomGuessStrategy::from_seed(seed));
        }

        Self::from_level(Level::parse(trimmed), seed)
    }

    /// The level this strategy is registered under, if any
    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        match self {
            Self::TieBreaker(_) => Some(Level::TieBreaker),
            Self::BestBucket(_) => Some(Level::BestBucket),
            Self::HouseGambit(_) => Some(Level::HouseGambit),
            Self::RandomGuess(_) => None,
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::from_level(Level::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn from_level_maps_each_level() {
        for level in Level::ALL {
            assert_eq!(StrategyType::from_level(level, Some(1)).level(), Some(level));
        }
    }

    #[test]
    fn from_name_recognizes_random() {
        let strategy = StrategyType::from_name("Random", Some(3));
        assert!(matches!(strategy, StrategyType::RandomGuess(_)));
        assert_eq!(strategy.level(), None);

        let strategy = StrategyType::from_name("baseline", None);
        assert!(matches!(strategy, StrategyType::RandomGuess(_)));
    }

    #[test]
    fn from_name_uses_levels() {
        assert!(matches!(
            StrategyType::from_name("2", None),
            StrategyType::TieBreaker(_)
        ));
        assert!(matches!(
            StrategyType::from_name("novice", None),
            StrategyType::HouseGambit(_)
        ));
    }

    #[test]
    fn from_name_falls_back_to_default() {
        assert!(matches!(
            StrategyType::from_name("nonsense", None),
            StrategyType::BestBucket(_)
        ));
        assert!(matches!(StrategyType::default(), StrategyType::BestBucket(_)));
    }

    #[test]
    fn dispatch_reaches_inner_strategy() {
        let pool = words(&["SALES", "SALTY", "SAUCE", "SAVES"]);
        let strategy = StrategyType::from_level(Level::TieBreaker, None);

        assert_eq!(strategy.best_guesses(&pool), words(&["SALES"]));
        assert_eq!(strategy.best_guess(&pool), Some(pool[0].clone()));
        assert_eq!(strategy.name(), "tie-breaker");
    }

    #[test]
    fn shared_score_and_narrow() {
        let pool = words(&["TERMS", "TEXAS", "TIRES", "TANKS"]);
        let strategy = StrategyType::from_name("random", Some(9));

        assert_eq!(strategy.score(&pool[0], &pool).information_value(), 3);
        assert_eq!(strategy.narrow(&pool, &pool[0], 2), words(&["TANKS"]));
    }
}
