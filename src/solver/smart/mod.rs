//! Sampled expected-remaining guess selection
//!
//! Each guess is scored by the mean number of candidates left over every
//! hypothetical secret in the population; the smallest mean wins.

mod calculator;
mod selector;

pub use calculator::score_guess;
pub use selector::{sample_population, select_best_guess};
