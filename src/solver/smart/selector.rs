//! Sampled guess selection
//!
//! Scores every member of a (possibly sampled) population as a guess against the
//! same population and keeps the lowest average remaining count.

use super::calculator::score_guess;
use crate::core::{LengthMismatch, Mask, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;

/// Population to evaluate: `cap` draws with replacement, or all candidates if they fit
pub fn sample_population<'a, R: Rng + ?Sized>(
    candidates: &'a [Word],
    cap: usize,
    rng: &mut R,
) -> Vec<&'a Word> {
    if candidates.len() > cap {
        (0..cap).filter_map(|_| candidates.choose(rng)).collect()
    } else {
        candidates.iter().collect()
    }
}

/// Select the guess with the lowest average remaining count
///
/// Scores are computed in parallel but compared in population order: the first
/// positive score becomes the best, and only a strictly smaller score replaces it.
/// Returns the guess and its score, or `None` if nothing scores above zero.
///
/// # Errors
/// Returns `LengthMismatch` if a population member does not match the mask's
/// word length.
///
/// # Examples
/// ```
/// use wordle_mask::core::{Mask, Word};
/// use wordle_mask::solver::smart::select_best_guess;
///
/// let candidates: Vec<Word> = ["crate", "grate", "crane"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let population: Vec<&Word> = candidates.iter().collect();
///
/// let (best, score) = select_best_guess(&Mask::new(5), &population).unwrap().unwrap();
/// assert_eq!(best.text(), "CRATE");
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
pub fn select_best_guess<'a>(
    mask: &Mask,
    population: &[&'a Word],
) -> Result<Option<(&'a Word, f64)>, LengthMismatch> {
    let scores: Vec<f64> = population
        .par_iter()
        .map(|&guess| score_guess(mask, guess, population))
        .collect::<Result<_, _>>()?;

    let mut best: Option<(&'a Word, f64)> = None;
    for (&guess, score) in population.iter().zip(scores) {
        best = match best {
            None if score > 0.0 => Some((guess, score)),
            Some((_, best_score)) if score < best_score => Some((guess, score)),
            other => other,
        };
    }

    if let Some((guess, score)) = best {
        log::debug!(
            "selected {guess} from population of {} (score {score:.4})",
            population.len()
        );
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn small_candidate_lists_are_used_whole() {
        let candidates = words(&["crane", "trace", "grape"]);
        let mut rng = StdRng::seed_from_u64(7);
        let population = sample_population(&candidates, 3, &mut rng);
        assert_eq!(population, candidates.iter().collect::<Vec<_>>());
    }

    #[test]
    fn large_candidate_lists_are_sampled_to_the_cap() {
        let candidates = words(&["crane", "trace", "grape", "slate", "irate", "stare"]);
        let mut rng = StdRng::seed_from_u64(7);
        let population = sample_population(&candidates, 4, &mut rng);
        assert_eq!(population.len(), 4);
        assert!(population.iter().all(|w| candidates.contains(*w)));
    }

    #[test]
    fn sampling_draws_with_replacement() {
        let candidates = words(&["crane", "trace", "grape", "slate", "irate", "stare"]);
        let has_repeat = |seed| {
            let population = sample_population(&candidates, 5, &mut StdRng::seed_from_u64(seed));
            let distinct: HashSet<&Word> = population.iter().copied().collect();
            distinct.len() < population.len()
        };

        assert!(has_repeat(7));
        assert!((0..32).filter(|&seed| has_repeat(seed)).count() > 16);
    }

    #[test]
    fn mismatched_population_is_an_error() {
        let candidates = words(&["crane", "cat"]);
        let population: Vec<&Word> = candidates.iter().collect();
        assert!(select_best_guess(&Mask::new(5), &population).is_err());
    }

    #[test]
    fn sampling_is_reproducible_with_a_seed() {
        let candidates = words(&["crane", "trace", "grape", "slate", "irate", "stare"]);
        let a = sample_population(&candidates, 3, &mut StdRng::seed_from_u64(42));
        let b = sample_population(&candidates, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn picks_the_exhaustive_minimum_first_on_ties() {
        let candidates = words(&["slate", "crane", "stare", "spare", "irate", "grate", "crate"]);
        let population: Vec<&Word> = candidates.iter().collect();
        let mask = Mask::new(5);

        let (best, score) = select_best_guess(&mask, &population).unwrap().unwrap();

        let scores: Vec<f64> = population
            .iter()
            .map(|g| score_guess(&mask, g, &population).unwrap())
            .collect();
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let first_min = scores.iter().position(|&s| s == min).unwrap();
        assert_eq!(best, population[first_min]);
        assert!((score - min).abs() < f64::EPSILON);
    }

    #[test]
    fn equal_scores_keep_the_first_guess() {
        let candidates = words(&["aaaaa", "bbbbb"]);
        let population: Vec<&Word> = candidates.iter().collect();
        let (best, score) = select_best_guess(&Mask::new(5), &population).unwrap().unwrap();
        assert_eq!(best.text(), "AAAAA");
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_candidate_is_chosen() {
        let candidates = words(&["crane"]);
        let population: Vec<&Word> = candidates.iter().collect();
        let (best, _) = select_best_guess(&Mask::new(5), &population).unwrap().unwrap();
        assert_eq!(best.text(), "CRANE");
    }

    #[test]
    fn empty_population_selects_nothing() {
        assert!(select_best_guess(&Mask::new(5), &[]).unwrap().is_none());
    }

    #[test]
    fn repeated_runs_agree() {
        let candidates = words(&["slate", "crane", "stare", "spare", "irate", "grate"]);
        let mask = Mask::new(5);
        let first = {
            let population = sample_population(&candidates, 6, &mut StdRng::seed_from_u64(3));
            select_best_guess(&mask, &population)
                .unwrap()
                .map(|(w, s)| (w.clone(), s))
        };
        for _ in 0..3 {
            let population = sample_population(&candidates, 6, &mut StdRng::seed_from_u64(3));
            let again = select_best_guess(&mask, &population)
                .unwrap()
                .map(|(w, s)| (w.clone(), s));
            assert_eq!(again, first);
        }
    }
}
