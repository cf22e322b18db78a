//! Candidate elimination

use crate::core::Word;

/// Keep the pool members that would have answered `guess` with `likeness`
///
/// Pool order is preserved and the input is untouched. An impossible
/// likeness leaves nothing, which callers treat as a contradiction.
///
/// # Examples
/// ```
/// use term_crack::core::Word;
/// use term_crack::solver::narrow;
///
/// let pool: Vec<Word> = ["TERMS", "TEXAS", "TIRES", "TANKS"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let remaining = narrow(&pool, &pool[0], 2);
/// assert_eq!(remaining, vec![Word::new("TANKS").unwrap()]);
/// ```
#[must_use]
pub fn narrow(pool: &[Word], guess: &Word, likeness: usize) -> Vec<Word> {
    pool.iter()
        .filter(|&candidate| guess.match_count(candidate) == likeness)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn narrow_keeps_consistent_members() {
        let pool = words(&["TERMS", "TEXAS", "TIRES", "TANKS"]);

        let remaining = narrow(&pool, &pool[0], 3);
        assert_eq!(remaining, words(&["TEXAS", "TIRES"]));
    }

    #[test]
    fn narrow_exact_hit_keeps_guess() {
        let pool = words(&["SALES", "SALTY", "SAUCE", "SAVES"]);

        let remaining = narrow(&pool, &pool[2], 5);
        assert_eq!(remaining, words(&["SAUCE"]));
    }

    #[test]
    fn narrow_out_of_range_is_empty() {
        let pool = words(&["SALES", "SALTY"]);

        assert!(narrow(&pool, &pool[0], 9).is_empty());
    }

    #[test]
    fn narrow_does_not_touch_input() {
        let pool = words(&["DANTA", "DHOBI", "LILTS"]);
        let before = pool.clone();

        let _ = narrow(&pool, &pool[2], 0);
        assert_eq!(pool, before);
    }

    #[test]
    fn narrow_empty_pool() {
        let guess = Word::new("TERMS").unwrap();
        assert!(narrow(&[], &guess, 0).is_empty());
    }

    proptest! {
        #[test]
        fn narrowing_is_exact_and_idempotent(
            guess in "[A-C]{4}",
            pool in prop::collection::vec("[A-C]{4}", 0..25),
            likeness in 0usize..6,
        ) {
            let guess = Word::new(guess).unwrap();
            let pool: Vec<Word> = pool.into_iter().map(|w| Word::new(w).unwrap()).collect();

            let kept = narrow(&pool, &guess, likeness);

            for word in &pool {
                let consistent = guess.match_count(word) == likeness;
                prop_assert_eq!(kept.contains(word), consistent);
            }
            prop_assert_eq!(narrow(&kept, &guess, likeness), kept);
        }
    }
}
