//! Console narration of games and trials

use super::formatters::{colored_code, create_progress_bar, paint};
use crate::commands::{TrialObserver, TrialResult, TrialSummary};
use crate::core::Assessment;
use crate::solver::{Choice, GameObserver};
use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Every round, every trial and a closing summary
    #[default]
    Verbose,
    /// One round count per trial
    Quiet,
}

/// Writes game and trial events to `out`
pub struct Narrator<W> {
    out: W,
    verbosity: Verbosity,
    color: bool,
}

impl<W: Write> Narrator<W> {
    pub const fn new(out: W, verbosity: Verbosity, color: bool) -> Self {
        Self {
            out,
            verbosity,
            color,
        }
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the closing summary of a multi-trial run
    ///
    /// Nothing is printed in quiet mode or for a single trial.
    ///
    /// # Errors
    /// Returns any error from writing to the output.
    pub fn print_trial_summary(&mut self, summary: &TrialSummary) -> io::Result<()> {
        if !self.is_verbose() || summary.trials.len() <= 1 {
            return Ok(());
        }
        let color = self.color;
        let trials = summary.trials.len();

        writeln!(self.out)?;
        writeln!(self.out, "{}", paint(&"═".repeat(50), color, |s| s.cyan()))?;
        writeln!(
            self.out,
            " {}",
            paint("TRIAL SUMMARY", color, |s| s.bright_cyan().bold())
        )?;
        writeln!(self.out, "{}", paint(&"═".repeat(50), color, |s| s.cyan()))?;

        writeln!(self.out, "   Trials:           {trials}")?;
        writeln!(
            self.out,
            "   Average guesses:  {}",
            paint(&format!("{:.2}", summary.average_rounds), color, |s| {
                s.bright_yellow().bold()
            })
        )?;
        writeln!(
            self.out,
            "   Best case:        {}",
            paint(&summary.min_rounds.to_string(), color, |s| s.green())
        )?;
        writeln!(
            self.out,
            "   Worst case:       {}",
            paint(&summary.max_rounds.to_string(), color, |s| s.yellow())
        )?;
        writeln!(
            self.out,
            "   Time taken:       {:.2}s",
            summary.total_time.as_secs_f64()
        )?;

        writeln!(self.out)?;
        writeln!(
            self.out,
            " {}",
            paint("Distribution:", color, |s| s.bright_cyan().bold())
        )?;
        let mut rounds: Vec<_> = summary.distribution.iter().collect();
        rounds.sort_unstable();
        for (&guesses, &count) in rounds {
            let pct = count as f64 / trials as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            writeln!(
                self.out,
                "   {guesses:3}: {} {count:4} ({pct:5.1}%)",
                paint(&bar, color, |s| s.green())
            )?;
        }
        Ok(())
    }
}

impl<W: Write> GameObserver for Narrator<W> {
    fn guess_chosen(&mut self, round: usize, choice: &Choice) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        if let Some(score) = choice.score {
            writeln!(self.out, "Choosing {} average score: {score:.6}", choice.word)?;
        }
        writeln!(self.out, "{round:03}> {}", choice.word)
    }

    fn assessed(&mut self, assessment: &Assessment) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        writeln!(self.out, "   < {}", colored_code(assessment, self.color))
    }

    fn narrowed(&mut self, remaining: usize) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        writeln!(self.out, "\t{remaining} words remain")
    }

    fn solved(&mut self, rounds: usize) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        writeln!(self.out, "Success in {rounds} guesses")
    }
}

impl<W: Write> TrialObserver for Narrator<W> {
    fn trial_finished(&mut self, result: &TrialResult) -> io::Result<()> {
        match self.verbosity {
            Verbosity::Verbose => writeln!(
                self.out,
                "Trial: {} ({:.4})",
                result.index,
                result.duration.as_secs_f64()
            ),
            Verbosity::Quiet => writeln!(self.out, "{}", result.rounds),
        }
    }
}
