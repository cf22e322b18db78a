//! Strategy implementations
//!
//! Two scored strategies share `score_pool`; the blind ones share a seeded
//! random source.

mod best_bucket;
mod random;
mod tie_breaker;

pub use best_bucket::BestBucketStrategy;
pub use random::{HouseGambitStrategy, RandomGuessStrategy, SeededRng};
pub use tie_breaker::TieBreakerStrategy;

use crate::core::{ScoreInfo, Word, score};
use rayon::prelude::*;

/// Empty and single-member pools need no ranking
fn trivial(pool: &[Word]) -> Option<Vec<Word>> {
    (pool.len() <= 1).then(|| pool.to_vec())
}

/// Score every pool member against the pool, in pool order
fn score_pool(pool: &[Word]) -> Vec<(&Word, ScoreInfo)> {
    pool.par_iter()
        .map(|candidate| (candidate, score(candidate, pool)))
        .collect()
}

/// Keep the entries with the highest information value
fn max_information(scored: Vec<(&Word, ScoreInfo)>) -> Vec<(&Word, ScoreInfo)> {
    let best = scored
        .iter()
        .map(|(_, info)| info.information_value())
        .max()
        .unwrap_or(0);

    scored
        .into_iter()
        .filter(|(_, info)| info.information_value() == best)
        .collect()
}
