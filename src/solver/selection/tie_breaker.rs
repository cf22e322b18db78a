//! Deterministic two-stage selection
//!
//! Highest information value first; among those, smallest worst case.

use super::{max_information, score_pool, trivial};
use crate::core::Word;
use crate::solver::Strategy;

/// Maximize distinct likeness outcomes, break ties by the smallest worst case
///
/// A higher information value always wins even when its worst case is larger;
/// the worst case only separates candidates already tied on information.
/// Results keep pool order, so `best_guess` is reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieBreakerStrategy;

impl Strategy for TieBreakerStrategy {
    fn best_guesses(&self, pool: &[Word]) -> Vec<Word> {
        if let Some(words) = trivial(pool) {
            return words;
        }

        let top = max_information(score_pool(pool));

        let min_worst_case = top
            .iter()
            .map(|(_, info)| info.worst_case())
            .min()
            .unwrap_or(0);

        let best: Vec<Word> = top
            .into_iter()
            .filter(|(_, info)| info.worst_case() == min_worst_case)
            .map(|(word, _)| word.clone())
            .collect();

        log::debug!(
            "tie-breaker: {} of {} candidates tied (worst case {min_worst_case})",
            best.len(),
            pool.len()
        );

        best
    }

    fn name(&self) -> &'static str {
        "tie-breaker"
    }
}
