//! Guess selection and candidate elimination
//!
//! This module contains the strategy family, the level selector and the
//! session that drives a game.

pub mod level;
mod narrow;
pub mod selection;
mod session;
pub mod strategy;

pub use level::Level;
pub use narrow::narrow;
pub use selection::{
    BestBucketStrategy, HouseGambitStrategy, RandomGuessStrategy, SeededRng, TieBreakerStrategy,
};
pub use session::{Outcome, Session, SessionError, Turn};
pub use strategy::{Strategy, StrategyType};
