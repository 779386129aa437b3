//! Terminal output formatting
//!
//! Narration of games and trials, and the closing summary.

pub mod formatters;
mod narrator;

pub use narrator::{Narrator, Verbosity};
