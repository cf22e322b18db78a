//! Likeness bucket scoring
//!
//! Given a candidate guess and a pool, counts how many pool members would
//! answer each possible likeness.

use super::Word;

/// Likeness distribution of one candidate against a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreInfo {
    bucket_sizes: Vec<usize>,
    information_value: usize,
    worst_case: usize,
}

impl ScoreInfo {
    /// Build from raw bucket sizes, indexed by likeness
    #[must_use]
    pub fn from_buckets(bucket_sizes: Vec<usize>) -> Self {
        let information_value = bucket_sizes.iter().filter(|&&size| size > 0).count();
        let worst_case = bucket_sizes.iter().copied().max().unwrap_or(0);

        Self {
            bucket_sizes,
            information_value,
            worst_case,
        }
    }

    /// Pool members per likeness value, `0..=candidate length`
    #[must_use]
    pub fn bucket_sizes(&self) -> &[usize] {
        &self.bucket_sizes
    }

    /// Number of distinct likeness values this guess can produce
    #[must_use]
    pub const fn information_value(&self) -> usize {
        self.information_value
    }

    /// Size of the largest bucket
    #[must_use]
    pub const fn worst_case(&self) -> usize {
        self.worst_case
    }

    /// Number of scored pool members
    #[must_use]
    pub fn total(&self) -> usize {
        self.bucket_sizes.iter().sum()
    }

    /// Shannon entropy of the bucket distribution in bits
    ///
    /// H = -Σ p * log₂(p)
    #[must_use]
    pub fn entropy(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }

        self.bucket_sizes
            .iter()
            .filter(|&&size| size > 0)
            .map(|&size| {
                let p = size as f64 / total;
                -p * p.log2()
            })
            .sum()
    }

    /// Expected pool size after guessing this candidate
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }

        self.bucket_sizes
            .iter()
            .map(|&size| size as f64 * size as f64 / total)
            .sum()
    }
}

/// Score a candidate against every member of the pool
///
/// The candidate is compared with itself as well when it belongs to the pool;
/// this adds one member to the full-likeness bucket for every candidate alike
/// and leaves rankings unchanged. Match counts land in the word caches.
///
/// # Examples
/// ```
/// use term_crack::core::{Word, score};
///
/// let pool: Vec<Word> = ["SALES", "SALTY", "SAUCE", "SAVES"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let info = score(&pool[0], &pool);
/// assert_eq!(info.information_value(), 4);
/// assert_eq!(info.worst_case(), 1);
/// ```
#[must_use]
pub fn score(candidate: &Word, pool: &[Word]) -> ScoreInfo {
    let mut bucket_sizes = vec![0; candidate.len() + 1];

    for member in pool {
        bucket_sizes[candidate.match_count(member)] += 1;
    }

    ScoreInfo::from_buckets(bucket_sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn score_tanks_against_terms_pool() {
        let pool = words(&["TERMS", "TEXAS", "TIRES", "TANKS"]);

        let info = score(&pool[3], &pool);
        assert_eq!(info.bucket_sizes(), &[0, 0, 3, 0, 0, 1]);
        assert_eq!(info.information_value(), 2);
        assert_eq!(info.worst_case(), 3);
    }

    #[test]
    fn score_sales_distinguishes_everything() {
        let pool = words(&["SALES", "SALTY", "SAUCE", "SAVES"]);

        let info = score(&pool[0], &pool);
        assert_eq!(info.bucket_sizes(), &[0, 0, 1, 1, 1, 1]);
        assert_eq!(info.information_value(), 4);
        assert_eq!(info.worst_case(), 1);
    }

    #[test]
    fn score_lilts() {
        let pool = words(&["DANTA", "DHOBI", "LILTS", "OAKUM", "ALEFS"]);

        let info = score(&pool[2], &pool);
        assert_eq!(info.information_value(), 3);
        assert_eq!(info.worst_case(), 2);
    }

    #[test]
    fn score_includes_self_comparison() {
        let pool = words(&["TERMS", "TANKS"]);

        let info = score(&pool[0], &pool);
        assert_eq!(info.bucket_sizes()[5], 1);
        assert!(pool[0].has_cached_match_count(&pool[0]));
        assert!(pool[1].has_cached_match_count(&pool[0]));
    }

    #[test]
    fn score_candidate_outside_pool() {
        let pool = words(&["TERMS", "TANKS"]);
        let outsider = Word::new("TAXES").unwrap();

        let info = score(&outsider, &pool);
        assert_eq!(info.total(), 2);
        assert_eq!(info.bucket_sizes()[5], 0);
    }

    #[test]
    fn score_empty_pool_is_degenerate() {
        let info = score(&Word::new("TERMS").unwrap(), &[]);
        assert_eq!(info.bucket_sizes(), &[0; 6]);
        assert_eq!(info.information_value(), 0);
        assert_eq!(info.worst_case(), 0);
        assert!(info.entropy().abs() < f64::EPSILON);
        assert!(info.expected_remaining().abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_uniform_buckets() {
        // 4 buckets of one member each = log2(4) = 2 bits
        let info = ScoreInfo::from_buckets(vec![0, 0, 1, 1, 1, 1]);
        assert!((info.entropy() - 2.0).abs() < 0.001);
        assert!((info.expected_remaining() - 1.0).abs() < 0.001);
    }

    #[test]
    fn entropy_single_bucket() {
        let info = ScoreInfo::from_buckets(vec![0, 10, 0]);
        assert!(info.entropy().abs() < 0.001);
        assert!((info.expected_remaining() - 10.0).abs() < 0.001);
    }

    proptest! {
        #[test]
        fn buckets_sum_to_pool_size(
            candidate in "[A-D]{5}",
            pool in prop::collection::vec("[A-D]{5}", 0..20),
        ) {
            let candidate = Word::new(candidate).unwrap();
            let pool: Vec<Word> = pool.into_iter().map(|w| Word::new(w).unwrap()).collect();

            let info = score(&candidate, &pool);
            prop_assert_eq!(info.total(), pool.len());
            prop_assert_eq!(info.bucket_sizes().len(), candidate.len() + 1);
            prop_assert!(info.worst_case() <= pool.len());
            prop_assert!(info.information_value() <= candidate.len() + 1);
        }
    }
}
