//! Expected-remaining score for a single guess
//!
//! For a guess `g` over a population, every member `s` is treated as the secret in
//! turn: the mask is cloned, updated with `assess(s, g)`, and the population is
//! filtered with it. The score is the mean size of those filtered sets.

use crate::core::{LengthMismatch, Mask, Word, assess};
use crate::solver::filter::count_consistent;

/// Average number of population members left after guessing `guess`
///
/// Returns `0.0` for an empty population.
///
/// # Errors
/// Returns `LengthMismatch` if a population member or the guess does not match
/// the mask's word length.
///
/// # Examples
/// ```
/// use wordle_mask::core::{Mask, Word};
/// use wordle_mask::solver::smart::score_guess;
///
/// let population: Vec<Word> = ["crane", "trace", "grape"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = population.iter().collect();
///
/// // CRANE splits the three words apart completely
/// let score = score_guess(&Mask::new(5), &population[0], &refs).unwrap();
/// assert!((score - 1.0).abs() < f64::EPSILON);
/// ```
pub fn score_guess(mask: &Mask, guess: &Word, population: &[&Word]) -> Result<f64, LengthMismatch> {
    if population.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0;
    for &secret in population {
        let assessment = assess(secret, guess)?;
        let mut hypothetical = mask.clone();
        hypothetical.update(guess, &assessment)?;
        total += count_consistent(population, &hypothetical);
    }

    Ok(total as f64 / population.len() as f64)
}
