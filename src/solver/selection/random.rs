//! Randomized, unscored strategies
//!
//! Both draw from a `SeededRng`, so a fixed seed replays the same picks.

use super::trivial;
use crate::core::Word;
use crate::solver::Strategy;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::{Mutex, PoisonError};

/// Random source shared behind `&self`
pub struct SeededRng(Mutex<StdRng>);

impl SeededRng {
    /// Reproducible source
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Source seeded by the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Reproducible when `seed` is given, otherwise seeded by the OS
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::from_seed)
    }

    /// Wrap an existing generator
    #[must_use]
    pub const fn from_rng(rng: StdRng) -> Self {
        Self(Mutex::new(rng))
    }

    /// Uniform pick, `None` for an empty slice
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        let mut rng = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        items.choose(&mut *rng)
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

/// Baseline: any pool member, ignoring scores
///
/// Never reports a tied set. Each call is a fresh draw, so repeated calls on
/// the same pool may disagree.
#[derive(Default)]
pub struct RandomGuessStrategy {
    rng: SeededRng,
}

impl RandomGuessStrategy {
    /// Create with an explicit random source
    #[must_use]
    pub const fn new(rng: SeededRng) -> Self {
        Self { rng }
    }

    /// Create from an optional seed
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(SeededRng::from_optional_seed(seed))
    }
}

impl Strategy for RandomGuessStrategy {
    fn best_guesses(&self, pool: &[Word]) -> Vec<Word> {
        self.best_guess(pool).into_iter().collect()
    }

    fn best_guess(&self, pool: &[Word]) -> Option<Word> {
        self.rng.pick(pool).cloned()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Blind single pick from the whole pool
#[derive(Default)]
pub struct HouseGambitStrategy {
    rng: SeededRng,
}

impl HouseGambitStrategy {
    /// Create with an explicit random source
    #[must_use]
    pub const fn new(rng: SeededRng) -> Self {
        Self { rng }
    }

    /// Create from an optional seed
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(SeededRng::from_optional_seed(seed))
    }
}

impl Strategy for HouseGambitStrategy {
    fn best_guesses(&self, pool: &[Word]) -> Vec<Word> {
        if let Some(words) = trivial(pool) {
            return words;
        }

        self.rng.pick(pool).cloned().into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "house-gambit"
    }
}
