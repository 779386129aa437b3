//! Candidate filtering
//!
//! Works over owned words (the live candidate list) and borrowed words (a sampled
//! population) alike.

use crate::core::{Mask, Word};
use std::borrow::Borrow;

/// Every word still consistent with `mask`, in input order
///
/// # Examples
/// ```
/// use wordle_mask::core::{Mask, Word, assess};
/// use wordle_mask::solver::filter;
///
/// let words: Vec<Word> = ["crane", "trace", "grape"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let mut mask = Mask::new(5);
/// mask.update(&words[1], &assess(&words[0], &words[1]).unwrap()).unwrap();
///
/// assert_eq!(filter(&words, &mask), vec![words[0].clone()]);
/// ```
#[must_use]
pub fn filter<W: Borrow<Word> + Clone>(words: &[W], mask: &Mask) -> Vec<W> {
    words
        .iter()
        .filter(|&w| mask.valid(Borrow::<Word>::borrow(w)))
        .cloned()
        .collect()
}

/// Size of `filter(words, mask)` without building it
#[must_use]
pub fn count_consistent<W: Borrow<Word>>(words: &[W], mask: &Mask) -> usize {
    words.iter().filter(|&w| mask.valid(Borrow::<Word>::borrow(w))).count()
}
