//! Wordle Mask - CLI
//!
//! Plays repeated Wordle games with the mask-based solver, against a random or
//! fixed secret, or with a person assessing each guess.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_mask::{
    commands::{PromptAssessor, SecretSource, TrialConfig, run_trials},
    core::Word,
    output::{Narrator, Verbosity},
    solver::{DEFAULT_POPULATION_CAP, RandomStrategy, SmartStrategy, StrategyType},
    wordlists::{Dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_mask",
    about = "Wordle solver that narrows candidates with a letter mask and samples its guesses",
    version
)]
struct Cli {
    /// Number of trials to run
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,

    /// Dictionary file, one word per line (default: built-in word list)
    #[arg(short, long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Candidates sampled when scoring a guess
    #[arg(short, long, default_value_t = DEFAULT_POPULATION_CAP, value_parser = positive)]
    pop_size: usize,

    /// Opening guess; repeat to queue several
    #[arg(short, long = "guess", value_name = "WORD")]
    guesses: Vec<String>,

    /// Pick guesses uniformly from the candidates instead of scoring them
    #[arg(long)]
    random_choice: bool,

    /// Read each assessment from stdin instead of using a secret (ignored with --secret)
    #[arg(long)]
    prompt_assess: bool,

    /// Fixed secret for every trial (default: a random dictionary word)
    #[arg(short, long)]
    secret: Option<String>,

    /// Print only the number of guesses per trial
    #[arg(short, long)]
    quiet: bool,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// A fixed secret takes precedence over prompting
    fn prompts_for_assessments(&self) -> bool {
        self.prompt_assess && self.secret.is_none()
    }
}

fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from {}", path.display())),
        None => Dictionary::embedded().context("Built-in word list is malformed"),
    }
}

fn parse_word(text: &str, what: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("Invalid {what} '{text}'"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.words.as_ref())?;

    let openings = cli
        .guesses
        .iter()
        .map(|g| parse_word(g, "opening guess"))
        .collect::<Result<Vec<_>>>()?;
    let strategy = if cli.random_choice {
        StrategyType::Random(RandomStrategy)
    } else {
        StrategyType::Smart(SmartStrategy::new(cli.pop_size))
    };
    let config = TrialConfig::new(cli.repeat, openings, strategy);

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("random seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        Verbosity::Verbose
    };
    let mut narrator = Narrator::new(io::stdout(), verbosity, !cli.no_color);

    let progress = if verbosity == Verbosity::Quiet && cli.repeat > 1 {
        let pb = ProgressBar::new(cli.repeat as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    if cli.prompt_assess && !cli.prompts_for_assessments() {
        log::warn!("--secret given, ignoring --prompt-assess");
    }
    let mut prompt;
    let mut source = if let Some(secret) = &cli.secret {
        SecretSource::Fixed(parse_word(secret, "secret")?)
    } else if cli.prompts_for_assessments() {
        prompt = PromptAssessor::new(io::stdin().lock(), io::stdout());
        SecretSource::Human(&mut prompt)
    } else {
        SecretSource::Random
    };

    let summary = run_trials(
        &config,
        &dictionary,
        &mut source,
        &mut narrator,
        &mut rng,
        &progress,
    )?;
    narrator.print_trial_summary(&summary)?;

    Ok(())
}
