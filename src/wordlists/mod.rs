//! Word lists for terminal hacking
//!
//! Candidate pools come from the game screen, so the only built-in list is a
//! small demonstration pool.

pub mod loader;

/// Demonstration pool of five-letter terminal passwords
pub const SAMPLE: &[&str] = &[
    "TERMS", "TEXAS", "TIRES", "TANKS", "TAXES", "TIMES", "TILES", "TONES", "TAKES", "TAPES",
    "TALES", "TOWNS", "TRAPS", "SALES", "SALTY", "SAUCE", "SAVES", "LILTS", "DANTA", "OAKUM",
];

/// Number of words in `SAMPLE`
pub const SAMPLE_COUNT: usize = SAMPLE.len();

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;

    #[test]
    fn sample_words_are_valid_and_unique() {
        let words = words_from_slice(SAMPLE);
        assert_eq!(words.len(), SAMPLE_COUNT);
    }

    #[test]
    fn sample_words_share_length() {
        for &word in SAMPLE {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }
}
