//! Repeated independent games
//!
//! Runs a configured number of trials, each a full game against a fixed, random or
//! human-judged secret, and gathers round counts and timings.

use crate::core::{LengthMismatch, Word};
use crate::solver::{Assessor, Chooser, GameObserver, SecretAssessor, StrategyType, play};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

/// Configuration shared by every trial
#[derive(Debug, Clone)]
pub struct TrialConfig {
    pub repeat: usize,
    /// Played in order at the start of every trial. Each trial replays the full
    /// queue; the queue is not drained across trials.
    pub openings: Vec<Word>,
    pub strategy: StrategyType,
}

impl TrialConfig {
    #[must_use]
    pub const fn new(repeat: usize, openings: Vec<Word>, strategy: StrategyType) -> Self {
        Self {
            repeat,
            openings,
            strategy,
        }
    }
}

/// Where each trial's assessments come from
pub enum SecretSource<'a> {
    /// The same secret every trial
    Fixed(Word),
    /// A fresh uniform draw from the dictionary every trial
    Random,
    /// A person (or any other assessor) judges each guess
    Human(&'a mut dyn Assessor),
}

/// Outcome of a single trial
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub index: usize,
    /// `None` when a human held the secret
    pub secret: Option<Word>,
    pub rounds: usize,
    pub duration: Duration,
}

/// Statistics over all trials
#[derive(Debug)]
pub struct TrialSummary {
    pub trials: Vec<TrialResult>,
    pub distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
}

impl TrialSummary {
    fn from_results(trials: Vec<TrialResult>, total_time: Duration) -> Self {
        let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
        for trial in &trials {
            *distribution.entry(trial.rounds).or_insert(0) += 1;
        }

        let total: usize = trials.iter().map(|t| t.rounds).sum();
        let average_rounds = if trials.is_empty() {
            0.0
        } else {
            total as f64 / trials.len() as f64
        };

        Self {
            min_rounds: trials.iter().map(|t| t.rounds).min().unwrap_or(0),
            max_rounds: trials.iter().map(|t| t.rounds).max().unwrap_or(0),
            trials,
            distribution,
            total_time,
            average_rounds,
        }
    }
}

/// Observer that also hears about finished trials
pub trait TrialObserver: GameObserver {
    /// # Errors
    /// Returns any error from writing the event.
    fn trial_finished(&mut self, _result: &TrialResult) -> io::Result<()> {
        Ok(())
    }
}

impl TrialObserver for () {}

/// Run `config.repeat` independent games over `dictionary`
///
/// Openings and a fixed secret are checked against the dictionary's word length
/// before the first trial. `progress` is advanced once per trial; pass
/// `ProgressBar::hidden()` to draw nothing.
///
/// # Errors
///
/// Returns an error if an opening or the fixed secret has the wrong length, or if
/// any game fails (inconsistent assessments, I/O failure).
pub fn run_trials<O, R>(
    config: &TrialConfig,
    dictionary: &Dictionary,
    source: &mut SecretSource<'_>,
    observer: &mut O,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<TrialSummary>
where
    O: TrialObserver + ?Sized,
    R: Rng + ?Sized,
{
    let word_len = dictionary.word_len();
    for opening in &config.openings {
        LengthMismatch::check(word_len, opening.len())
            .with_context(|| format!("opening guess {opening} does not fit the dictionary"))?;
    }
    if let SecretSource::Fixed(secret) = source {
        LengthMismatch::check(word_len, secret.len())
            .with_context(|| format!("secret {secret} does not fit the dictionary"))?;
        if !dictionary.contains(secret) {
            log::warn!("secret {secret} is not in the dictionary and cannot be found");
        }
    }

    let total_start = Instant::now();
    let mut results = Vec::with_capacity(config.repeat);

    for index in 0..config.repeat {
        let start = Instant::now();
        let mut chooser = Chooser::new(config.openings.iter().cloned(), config.strategy);

        let (secret, outcome) = match source {
            SecretSource::Human(assessor) => (
                None,
                play(
                    dictionary.words(),
                    word_len,
                    &mut chooser,
                    &mut **assessor,
                    observer,
                    rng,
                ),
            ),
            SecretSource::Fixed(secret) => {
                let mut referee = SecretAssessor::new(secret.clone());
                let outcome = play(
                    dictionary.words(),
                    word_len,
                    &mut chooser,
                    &mut referee,
                    observer,
                    rng,
                );
                (Some(referee.secret().clone()), outcome)
            }
            SecretSource::Random => {
                let secret = dictionary
                    .words()
                    .choose(rng)
                    .cloned()
                    .context("dictionary is empty")?;
                let mut referee = SecretAssessor::new(secret);
                let outcome = play(
                    dictionary.words(),
                    word_len,
                    &mut chooser,
                    &mut referee,
                    observer,
                    rng,
                );
                (Some(referee.secret().clone()), outcome)
            }
        };
        let rounds = outcome.with_context(|| format!("trial {index} failed"))?;

        let result = TrialResult {
            index,
            secret,
            rounds,
            duration: start.elapsed(),
        };
        log::info!(
            "trial {index}: {} in {rounds} rounds",
            result.secret.as_ref().map_or("(human)", Word::text)
        );
        observer.trial_finished(&result)?;
        results.push(result);
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(TrialSummary::from_results(results, total_start.elapsed()))
}
