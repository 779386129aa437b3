//! Game loop
//!
//! A `Game` owns the live mask and candidate list. Each round a `Chooser` proposes
//! a guess, an `Assessor` judges it, and the game either ends solved or folds the
//! assessment into the mask and filters the candidates again.

use super::filter::filter;
use super::strategy::{Choice, Chooser};
use crate::core::{Assessment, LengthMismatch, Mask, Word, assess};
use rand::Rng;
use std::fmt;
use std::io;

/// Errors that end a game early
#[derive(Debug)]
pub enum GameError {
    /// A guess or assessment did not match the game's word length
    LengthMismatch(LengthMismatch),
    /// No guess could be produced; earlier assessments contradict each other
    NoCandidates { round: usize },
    /// Reading an assessment or writing narration failed
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch(e) => write!(f, "{e}"),
            Self::NoCandidates { round } => write!(
                f,
                "No candidates remain at round {round}; the assessments are inconsistent"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LengthMismatch(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::NoCandidates { .. } => None,
        }
    }
}

impl From<LengthMismatch> for GameError {
    fn from(e: LengthMismatch) -> Self {
        Self::LengthMismatch(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Source of assessments for a game
pub trait Assessor {
    /// Judge `guess`
    ///
    /// # Errors
    /// Returns `GameError` if no assessment can be obtained.
    fn assess(&mut self, guess: &Word) -> Result<Assessment, GameError>;
}

/// Assesses guesses against a known secret
#[derive(Debug, Clone)]
pub struct SecretAssessor {
    secret: Word,
}

impl SecretAssessor {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

impl Assessor for SecretAssessor {
    fn assess(&mut self, guess: &Word) -> Result<Assessment, GameError> {
        Ok(assess(&self.secret, guess)?)
    }
}

/// Receives game events as they happen
///
/// Every method defaults to doing nothing, so `()` is a silent observer.
pub trait GameObserver {
    /// A guess was chosen for the zero-based `round`
    ///
    /// # Errors
    /// Returns any error from writing the event.
    fn guess_chosen(&mut self, _round: usize, _choice: &Choice) -> io::Result<()> {
        Ok(())
    }

    /// # Errors
    /// Returns any error from writing the event.
    fn assessed(&mut self, _assessment: &Assessment) -> io::Result<()> {
        Ok(())
    }

    /// The candidate list was filtered down to `remaining` words
    ///
    /// # Errors
    /// Returns any error from writing the event.
    fn narrowed(&mut self, _remaining: usize) -> io::Result<()> {
        Ok(())
    }

    /// # Errors
    /// Returns any error from writing the event.
    fn solved(&mut self, _rounds: usize) -> io::Result<()> {
        Ok(())
    }
}

impl GameObserver for () {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Solved { rounds: usize },
}

/// Live state of one game
#[derive(Debug, Clone)]
pub struct Game {
    mask: Mask,
    candidates: Vec<Word>,
    rounds: usize,
    state: GameState,
}

impl Game {
    /// Start a game over `dictionary` with words of `word_len` letters
    ///
    /// Dictionary entries of any other length are left out of the candidates.
    #[must_use]
    pub fn new(dictionary: &[Word], word_len: usize) -> Self {
        Self {
            mask: Mask::new(word_len),
            candidates: dictionary
                .iter()
                .filter(|w| w.len() == word_len)
                .cloned()
                .collect(),
            rounds: 0,
            state: GameState::Playing,
        }
    }

    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Rounds completed so far
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Apply one round's guess and assessment
    ///
    /// An all-exact assessment solves the game. Anything else updates the mask and
    /// filters the candidates.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the guess or assessment has the wrong
    /// length; the round is not counted in that case.
    pub fn apply(&mut self, guess: &Word, assessment: &Assessment) -> Result<GameState, GameError> {
        if assessment.is_solved(self.mask.word_len()) {
            self.rounds += 1;
            self.state = GameState::Solved {
                rounds: self.rounds,
            };
            return Ok(self.state);
        }

        self.mask.update(guess, assessment)?;
        self.candidates = filter(&self.candidates, &self.mask);
        self.rounds += 1;
        Ok(self.state)
    }
}

/// Play one game to completion and return the number of rounds taken
///
/// # Errors
/// Returns `GameError` if an assessment has the wrong length, no guess can be
/// produced, or the assessor or observer fails.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_mask::core::Word;
/// use wordle_mask::solver::{Chooser, SecretAssessor, StrategyType, play};
///
/// let dictionary: Vec<Word> = ["crane", "trace", "grape", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let mut chooser = Chooser::new([], StrategyType::default());
/// let mut referee = SecretAssessor::new(Word::new("grape").unwrap());
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let rounds = play(&dictionary, 5, &mut chooser, &mut referee, &mut (), &mut rng).unwrap();
/// assert!(rounds >= 1 && rounds <= dictionary.len());
/// ```
pub fn play<A, O, R>(
    dictionary: &[Word],
    word_len: usize,
    chooser: &mut Chooser,
    assessor: &mut A,
    observer: &mut O,
    rng: &mut R,
) -> Result<usize, GameError>
where
    A: Assessor + ?Sized,
    O: GameObserver + ?Sized,
    R: Rng + ?Sized,
{
    let mut game = Game::new(dictionary, word_len);

    loop {
        let round = game.rounds();
        let choice = chooser
            .next_guess(game.mask(), game.candidates(), rng)?
            .ok_or(GameError::NoCandidates { round })?;
        observer.guess_chosen(round, &choice)?;

        let assessment = assessor.assess(&choice.word)?;
        observer.assessed(&assessment)?;

        match game.apply(&choice.word, &assessment)? {
            GameState::Solved { rounds } => {
                log::debug!("solved with {} in {rounds} rounds", choice.word);
                observer.solved(rounds)?;
                return Ok(rounds);
            }
            GameState::Playing => observer.narrowed(game.candidates().len())?,
        }
    }
}
