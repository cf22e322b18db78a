//! Core domain types for the terminal hacking minigame
//!
//! Words, their likeness relation and the bucket scores built on it.
//! Everything here is synchronous and side-effect free apart from the
//! match-count memo each word carries.

mod score;
mod word;

pub use score::{ScoreInfo, score};
pub use word::{Word, WordError, diff};
