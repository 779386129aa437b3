//! Guess selection strategies
//!
//! Defines the Strategy trait, its implementations, and the `Chooser` that plays
//! queued opening guesses before handing over to a strategy.

use super::smart::{sample_population, select_best_guess};
use crate::core::{LengthMismatch, Mask, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::VecDeque;

/// Population cap used when none is configured
pub const DEFAULT_POPULATION_CAP: usize = 20;

/// A guess together with the score that selected it, if any
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub word: Word,
    pub score: Option<f64>,
}

impl Choice {
    #[must_use]
    pub const fn unscored(word: Word) -> Self {
        Self { word, score: None }
    }
}

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess given the live mask and the candidates it allows
    ///
    /// Returns `None` if no guess can be produced (e.g. no candidates remain).
    ///
    /// # Errors
    /// Returns `LengthMismatch` if a candidate does not fit the mask.
    fn select_guess<R: Rng + ?Sized>(
        &self,
        mask: &Mask,
        candidates: &[Word],
        rng: &mut R,
    ) -> Result<Option<Choice>, LengthMismatch>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Sampled expected-remaining minimisation (default)
    Smart(SmartStrategy),
    /// Uniform random pick from the candidates
    Random(RandomStrategy),
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Smart(SmartStrategy::default())
    }
}

impl Strategy for StrategyType {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        mask: &Mask,
        candidates: &[Word],
        rng: &mut R,
    ) -> Result<Option<Choice>, LengthMismatch> {
        match self {
            Self::Smart(s) => s.select_guess(mask, candidates, rng),
            Self::Random(s) => s.select_guess(mask, candidates, rng),
        }
    }
}

/// Minimise the average remaining candidate count over a sampled population
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartStrategy {
    /// Candidates beyond this many are sampled down to it
    pub population_cap: usize,
}

impl SmartStrategy {
    #[must_use]
    pub const fn new(population_cap: usize) -> Self {
        Self { population_cap }
    }
}

impl Default for SmartStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_POPULATION_CAP)
    }
}

impl Strategy for SmartStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        mask: &Mask,
        candidates: &[Word],
        rng: &mut R,
    ) -> Result<Option<Choice>, LengthMismatch> {
        let population = sample_population(candidates, self.population_cap, rng);
        Ok(select_best_guess(mask, &population)?.map(|(word, score)| Choice {
            word: word.clone(),
            score: Some(score),
        }))
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        _mask: &Mask,
        candidates: &[Word],
        rng: &mut R,
    ) -> Result<Option<Choice>, LengthMismatch> {
        Ok(candidates
            .choose(rng)
            .map(|word| Choice::unscored(word.clone())))
    }
}

/// Plays queued opening guesses in order, then defers to a strategy
#[derive(Debug, Clone)]
pub struct Chooser {
    openings: VecDeque<Word>,
    strategy: StrategyType,
}

impl Chooser {
    #[must_use]
    pub fn new(openings: impl IntoIterator<Item = Word>, strategy: StrategyType) -> Self {
        Self {
            openings: openings.into_iter().collect(),
            strategy,
        }
    }

    /// Opening guesses not yet played
    #[must_use]
    pub fn pending_openings(&self) -> usize {
        self.openings.len()
    }

    /// Next guess: the front of the opening queue, else the strategy's choice
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the strategy meets a candidate that does not fit
    /// the mask.
    pub fn next_guess<R: Rng + ?Sized>(
        &mut self,
        mask: &Mask,
        candidates: &[Word],
        rng: &mut R,
    ) -> Result<Option<Choice>, LengthMismatch> {
        if let Some(opening) = self.openings.pop_front() {
            return Ok(Some(Choice::unscored(opening)));
        }
        self.strategy.select_guess(mask, candidates, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn smart_strategy_is_reproducible_with_full_population() {
        let candidates = words(&["slate", "crane", "stare", "spare", "irate", "grate"]);
        let strategy = SmartStrategy::new(candidates.len());
        let mask = Mask::new(5);

        let a = strategy.select_guess(&mask, &candidates, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = strategy.select_guess(&mask, &candidates, &mut StdRng::seed_from_u64(99)).unwrap();
        assert!(a.is_some());
        assert_eq!(a, b);
        assert!(a.unwrap().score.is_some());
    }

    #[test]
    fn smart_strategy_samples_from_candidates() {
        let candidates = words(&["slate", "crane", "stare", "spare", "irate", "grate"]);
        let strategy = SmartStrategy::new(2);
        let mut rng = StdRng::seed_from_u64(5);
        let choice = strategy
            .select_guess(&Mask::new(5), &candidates, &mut rng)
            .unwrap()
            .unwrap();
        assert!(candidates.contains(&choice.word));
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let candidates = words(&["irate"]);
        let mut rng = StdRng::seed_from_u64(0);
        let choice = RandomStrategy
            .select_guess(&Mask::new(5), &candidates, &mut rng)
            .unwrap()
            .unwrap();
        assert_eq!(choice.word.text(), "IRATE");
        assert_eq!(choice.score, None);
    }

    #[test]
    fn strategies_return_none_without_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        let mask = Mask::new(5);
        assert!(
            StrategyType::default()
                .select_guess(&mask, &[], &mut rng)
                .unwrap()
                .is_none()
        );
        assert!(
            StrategyType::Random(RandomStrategy)
                .select_guess(&mask, &[], &mut rng)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn default_strategy_is_smart_with_default_cap() {
        assert_eq!(
            StrategyType::default(),
            StrategyType::Smart(SmartStrategy::new(DEFAULT_POPULATION_CAP))
        );
    }

    #[test]
    fn chooser_plays_openings_in_order_then_strategy() {
        let candidates = words(&["crane"]);
        let mut chooser = Chooser::new(
            words(&["slate", "audio"]),
            StrategyType::Random(RandomStrategy),
        );
        let mut rng = StdRng::seed_from_u64(0);
        let mask = Mask::new(5);

        assert_eq!(chooser.pending_openings(), 2);
        let first = chooser.next_guess(&mask, &candidates, &mut rng).unwrap().unwrap();
        let second = chooser.next_guess(&mask, &candidates, &mut rng).unwrap().unwrap();
        let third = chooser.next_guess(&mask, &candidates, &mut rng).unwrap().unwrap();

        assert_eq!(first.word.text(), "SLATE");
        assert_eq!(second.word.text(), "AUDIO");
        assert_eq!(third.word.text(), "CRANE");
        assert_eq!(chooser.pending_openings(), 0);
    }

    #[test]
    fn openings_are_played_even_without_candidates() {
        let mut chooser = Chooser::new(words(&["slate"]), StrategyType::default());
        let mut rng = StdRng::seed_from_u64(0);
        let choice = chooser.next_guess(&Mask::new(5), &[], &mut rng).unwrap();
        assert_eq!(choice, Some(Choice::unscored(Word::new("slate").unwrap())));
    }
}
