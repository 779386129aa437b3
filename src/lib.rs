//! Wordle Mask
//!
//! A Wordle solver that folds every assessment into a per-letter mask, filters the
//! dictionary against it, and picks each guess by minimising the average number of
//! candidates left over a sampled population.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_mask::core::{Mask, Word, assess};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let assessment = assess(&secret, &guess).unwrap();
//! assert_eq!(assessment.to_string(), "BGGYG");
//!
//! let mut mask = Mask::new(5);
//! mask.update(&guess, &assessment).unwrap();
//! assert!(mask.valid(&secret));
//! assert!(!mask.valid(&guess));
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
