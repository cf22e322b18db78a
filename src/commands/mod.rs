//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{DEFAULT_ATTEMPTS, GuessStep, SolveConfig, SolveResult, solve_word};

use crate::core::WordError;
use crate::solver::SessionError;
use thiserror::Error;

/// Errors surfaced by the commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("{0} is not one of the candidates")]
    NotInPool(String),
    #[error("no candidates to work with")]
    NoCandidates,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}
