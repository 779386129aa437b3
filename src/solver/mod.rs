//! Wordle solving algorithms
//!
//! Candidate filtering, the sampled guess selector, strategies and the game loop.

mod engine;
pub mod filter;
pub mod smart;
pub mod strategy;

pub use engine::{Assessor, Game, GameError, GameObserver, GameState, SecretAssessor, play};
pub use filter::{count_consistent, filter};
pub use strategy::{
    Choice, Chooser, DEFAULT_POPULATION_CAP, RandomStrategy, SmartStrategy, Strategy, StrategyType,
};
