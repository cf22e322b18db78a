//! Word analysis command
//!
//! Scores a single word against a candidate pool.

use super::CommandError;
use crate::core::{ScoreInfo, Word};
use crate::solver::Strategy;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub score: ScoreInfo,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    pub in_pool: bool,
}

/// Analyze how well a word splits a set of candidates
///
/// The word does not have to be a candidate itself.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (empty or contains non-letters)
/// - The pool is empty
pub fn analyze_word<S: Strategy>(
    word: &str,
    pool: &[Word],
    strategy: &S,
) -> Result<AnalysisResult, CommandError> {
    let word = Word::new(word)?;

    if pool.is_empty() {
        return Err(CommandError::NoCandidates);
    }

    let score = strategy.score(&word, pool);

    Ok(AnalysisResult {
        in_pool: pool.contains(&word),
        entropy: score.entropy(),
        expected_remaining: score.expected_remaining(),
        total_candidates: pool.len(),
        word,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::TieBreakerStrategy;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_valid_word() {
        let pool = words_from_slice(&["SALES", "SALTY", "SAUCE", "SAVES"]);

        let result = analyze_word("sales", &pool, &TieBreakerStrategy).unwrap();

        assert_eq!(result.word.text(), "SALES");
        assert!(result.in_pool);
        assert_eq!(result.score.information_value(), 4);
        assert_eq!(result.score.worst_case(), 1);
        assert!((result.entropy - 2.0).abs() < 0.001);
        assert!((result.expected_remaining - 1.0).abs() < 0.001);
        assert_eq!(result.total_candidates, 4);
    }

    #[test]
    fn analyze_word_outside_pool() {
        let pool = words_from_slice(&["TERMS", "TEXAS", "TIRES", "TANKS"]);

        let result = analyze_word("taxes", &pool, &TieBreakerStrategy).unwrap();
        assert!(!result.in_pool);
        assert_eq!(result.score.total(), 4);
    }

    #[test]
    fn analyze_invalid_word() {
        let pool = words_from_slice(&["TERMS"]);

        let result = analyze_word("t3rms", &pool, &TieBreakerStrategy);
        assert!(matches!(result, Err(CommandError::InvalidWord(_))));
    }

    #[test]
    fn analyze_empty_pool() {
        let result = analyze_word("terms", &[], &TieBreakerStrategy);
        assert!(matches!(result, Err(CommandError::NoCandidates)));
    }

    #[test]
    fn entropy_properties() {
        let pool = words_from_slice(crate::wordlists::SAMPLE);

        let result = analyze_word("tapes", &pool, &TieBreakerStrategy).unwrap();

        // Entropy should be bounded
        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (result.score.information_value() as f64).log2() + 1e-9);

        // Expected remaining should be sensible
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= pool.len() as f64);
    }
}
