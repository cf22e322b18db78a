//! Benchmark command
//!
//! Plays every candidate as the password and collects guess statistics.

use super::CommandError;
use super::solve::play;
use crate::core::Word;
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub contradictions: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the strategy against each pool member as the password
///
/// Guess counts and the distribution cover solved games only.
///
/// # Errors
///
/// Returns an error if a session rejects a simulated response.
pub fn run_benchmark<S: Strategy>(
    strategy: &S,
    pool: &[Word],
    max_guesses: usize,
    show_progress: bool,
) -> Result<BenchmarkResult, CommandError> {
    let pb = if show_progress {
        progress_bar(pool.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut contradictions = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for secret in pool {
        let result = play(secret, pool, strategy, max_guesses)?;

        if result.success {
            let guesses = result.steps.len();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_seen = max_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else if result.contradiction {
            contradictions += 1;
        }

        if solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = pool.len();
    log::info!(
        "{}: solved {solved}/{total_words} in {:.2}s",
        strategy.name(),
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        strategy: strategy.name(),
        total_words,
        solved,
        failed: total_words - solved,
        contradictions,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_seen,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{BestBucketStrategy, TieBreakerStrategy};
    use crate::wordlists::SAMPLE;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let pool = words_from_slice(SAMPLE);

        let result = run_benchmark(&TieBreakerStrategy, &pool, pool.len(), false).unwrap();

        assert_eq!(result.total_words, SAMPLE.len());
        assert_eq!(result.solved, SAMPLE.len());
        assert_eq!(result.failed, 0);
        assert_eq!(result.contradictions, 0);
        assert!(result.average_guesses >= 1.0);
        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.strategy, "tie-breaker");
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let pool = words_from_slice(SAMPLE);
        let strategy = BestBucketStrategy::from_seed(Some(8));

        let result = run_benchmark(&strategy, &pool, 4, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failed, result.total_words);
        for &guess_count in result.distribution.keys() {
            assert!((1..=4).contains(&guess_count));
        }
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&TieBreakerStrategy, &[], 4, false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let pool = words_from_slice(&["DANTA", "DHOBI", "LILTS", "OAKUM", "ALEFS"]);

        let result = run_benchmark(&TieBreakerStrategy, &pool, 5, false).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }
}
