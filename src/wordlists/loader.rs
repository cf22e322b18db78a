//! Word list loading utilities
//!
//! Turns raw text (a file, pasted terminal output, command-line arguments)
//! into a de-duplicated candidate pool.

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid words", .0.display())]
    NoWords(PathBuf),
}

/// Parse candidate words out of free text
///
/// Tokens are separated by whitespace or commas. Invalid tokens are skipped
/// with a warning and repeated words are kept once, in first-seen order.
///
/// # Examples
/// ```
/// use term_crack::wordlists::loader::parse_words;
///
/// let words = parse_words("terms, texas tires\nTERMS t1res");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["TERMS", "TEXAS", "TIRES"]);
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<Word> {
    words_from_tokens(
        text.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty()),
    )
}

/// Convert string tokens to a de-duplicated Word vector
pub fn words_from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    tokens
        .into_iter()
        .filter_map(|token| match Word::new(token) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("skipping {token:?}: {e}");
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::NoWords` if it holds no valid word.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(WordListError::NoWords(path.to_path_buf()));
    }

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Group words by length, keeping order within each group
#[must_use]
pub fn group_by_length(words: &[Word]) -> FxHashMap<usize, Vec<Word>> {
    let mut groups: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
    for word in words {
        groups.entry(word.len()).or_default().push(word.clone());
    }
    groups
}

/// The most common length; ties go to the length seen first
#[must_use]
pub fn dominant_length(words: &[Word]) -> Option<usize> {
    let groups = group_by_length(words);

    let mut order: Vec<usize> = Vec::new();
    for word in words {
        if !order.contains(&word.len()) {
            order.push(word.len());
        }
    }

    order
        .into_iter()
        .rev()
        .max_by_key(|len| groups.get(len).map_or(0, Vec::len))
}

/// Keep only words of the dominant length, logging what was dropped
#[must_use]
pub fn same_length_pool(words: Vec<Word>) -> Vec<Word> {
    let Some(len) = dominant_length(&words) else {
        return words;
    };

    let (kept, dropped): (Vec<Word>, Vec<Word>) =
        words.into_iter().partition(|word| word.len() == len);

    for word in &dropped {
        log::warn!("dropping {word}: expected {len} letters");
    }

    kept
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_tokens(slice.iter().copied())
}
