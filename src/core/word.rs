//! Candidate word representation
//!
//! A Word is an upper-cased, letters-only token with a memoized likeness
//! (positional match count) against other words.

use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Sub;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// A candidate password shown on the terminal
///
/// Cloning is cheap and clones share the same match-count memo, so one word
/// value behaves as a single instance no matter how many pools hold it.
#[derive(Clone)]
pub struct Word {
    inner: Arc<WordInner>,
}

struct WordInner {
    text: Arc<str>,
    matches: RwLock<FxHashMap<Arc<str>, usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("invalid character {character:?} at position {position}, only ASCII letters are allowed")]
    InvalidCharacter { character: char, position: usize },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is stored upper-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty or whitespace only
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use term_crack::core::Word;
    ///
    /// let word = Word::new("terms").unwrap();
    /// assert_eq!(word.text(), "TERMS");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("t3rms").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.trim().is_empty() {
            return Err(WordError::Empty);
        }

        if let Some((position, character)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(WordError::InvalidCharacter {
                character,
                position,
            });
        }

        Ok(Self {
            inner: Arc::new(WordInner {
                text: Arc::from(text.to_ascii_uppercase()),
                matches: RwLock::new(FxHashMap::default()),
            }),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.inner.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.inner.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.text.is_empty()
    }

    /// Count the positions where both words hold the same letter
    ///
    /// Only the first `min(len)` positions are compared. The result is cached
    /// on both words, so later calls in either direction are lookups.
    ///
    /// # Examples
    /// ```
    /// use term_crack::core::Word;
    ///
    /// let terms = Word::new("TERMS").unwrap();
    /// let tanks = Word::new("TANKS").unwrap();
    /// assert_eq!(terms.match_count(&tanks), 2);
    /// assert!(tanks.has_cached_match_count(&terms));
    /// ```
    pub fn match_count(&self, other: &Self) -> usize {
        if let Some(count) = self.cached(other) {
            return count;
        }

        let count = self
            .chars()
            .iter()
            .zip(other.chars())
            .filter(|(a, b)| a == b)
            .count();

        // Two separate inserts; a concurrent duplicate computation stores the same value.
        self.remember(other, count);
        other.remember(self, count);

        count
    }

    /// Whether a match count against `other` is already memoized
    #[must_use]
    pub fn has_cached_match_count(&self, other: &Self) -> bool {
        self.cached(other).is_some()
    }

    fn cached(&self, other: &Self) -> Option<usize> {
        self.inner
            .matches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(other.text())
            .copied()
    }

    fn remember(&self, other: &Self, count: usize) {
        self.inner
            .matches
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Arc::clone(&other.inner.text), count);
    }
}

/// Letters that differ between two words
///
/// `max(len a, len b) - match_count(a, b)`. A missing operand counts as a
/// zero-length word.
///
/// # Examples
/// ```
/// use term_crack::core::{Word, diff};
///
/// let texas = Word::new("TEXAS").unwrap();
/// let tires = Word::new("TIRES").unwrap();
/// assert_eq!(diff(Some(&texas), Some(&tires)), 3);
/// assert_eq!(diff(Some(&texas), None), 5);
/// ```
#[must_use]
pub fn diff(a: Option<&Word>, b: Option<&Word>) -> usize {
    match (a, b) {
        (Some(a), Some(b)) => a.len().max(b.len()) - a.match_count(b),
        (Some(word), None) | (None, Some(word)) => word.len(),
        (None, None) => 0,
    }
}

impl Sub for &Word {
    type Output = usize;

    fn sub(self, rhs: Self) -> usize {
        diff(Some(self), Some(rhs))
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.inner.text == other.inner.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.text.cmp(&other.inner.text)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Word").field(&self.text()).finish()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.text)
    }
}
