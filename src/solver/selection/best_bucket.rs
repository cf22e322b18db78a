//! Information-value selection with a random tie-break

use super::{SeededRng, max_information, score_pool, trivial};
use crate::core::Word;
use crate::solver::Strategy;

/// Maximize distinct likeness outcomes; pick uniformly among the ties
///
/// Worst case is ignored entirely.
#[derive(Default)]
pub struct BestBucketStrategy {
    rng: SeededRng,
}

impl BestBucketStrategy {
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

impl Strategy for BestBucketStrategy {
    fn best_guesses(&self, pool: &[Word]) -> Vec<Word> {
        if let Some(words) = trivial(pool) {
            return words;
        }

        let best: Vec<Word> = max_information(score_pool(pool))
            .into_iter()
            .map(|(word, _)| word.clone())
            .collect();

        log::debug!("best-bucket: {} of {} candidates tied", best.len(), pool.len());

        best
    }

    fn best_guess(&self, pool: &[Word]) -> Option<Word> {
        let best = self.best_guesses(pool);
        self.rng.pick(&best).cloned()
    }

    fn name(&self) -> &'static str {
        "best-bucket"
    }
}
