//! Terminal Hacking Solver
//!
//! Helps crack the password minigame: pick the guess that splits the
//! candidates into the most likeness outcomes, read the terminal's answer,
//! discard every word that could not have produced it.
//!
//! # Quick Start
//!
//! ```rust
//! use term_crack::core::Word;
//! use term_crack::solver::{Outcome, Session, TieBreakerStrategy};
//!
//! let words: Vec<Word> = ["TERMS", "TEXAS", "TIRES", "TANKS"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let mut session = Session::new(TieBreakerStrategy, words);
//! let guess = session.suggest().unwrap();
//! assert_eq!(guess.text(), "TERMS");
//!
//! // The terminal answers Likeness=2
//! let outcome = session.record(guess, 2).unwrap();
//! assert_eq!(outcome, Outcome::Deduced(Word::new("TANKS").unwrap()));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
