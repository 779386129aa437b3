//! Assessment of a guess against a secret
//!
//! An assessment holds one mark per position:
//! - `G` = Exact (correct letter, correct position)
//! - `Y` = Present (letter occurs elsewhere, limited by its count in the secret)
//! - `B` = Absent

use super::word::{LengthMismatch, Word, letter_index};
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Display symbol: `G`, `Y` or `B`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Read a symbol typed by a person; anything but `G`/`Y` counts as absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol.to_ascii_uppercase() {
            'G' => Self::Exact,
            'Y' => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Per-position marks for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assessment(Vec<Mark>);

impl Assessment {
    /// Wrap a mark sequence
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// Parse a line of human input without validating the symbols
    ///
    /// The input is trimmed first. Every symbol other than `G` or `Y` (either case)
    /// becomes `Absent`, and the length is kept as typed.
    ///
    /// # Examples
    /// ```
    /// use wordle_mask::core::{Assessment, Mark};
    ///
    /// let a = Assessment::parse(" gy-B?\n");
    /// assert_eq!(a.to_string(), "GYBBB");
    /// assert_eq!(a.marks()[1], Mark::Present);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self(input.trim().chars().map(Mark::from_symbol).collect())
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every one of `word_len` positions is exact
    #[must_use]
    pub fn is_solved(&self, word_len: usize) -> bool {
        self.0.len() == word_len && self.0.iter().all(|&m| m == Mark::Exact)
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// Assess `guess` against `secret` with Wordle's duplicate-letter rules
///
/// # Algorithm
/// 1. Count each letter of the secret
/// 2. First pass: mark exact matches and consume their counts
/// 3. Second pass, left to right over the rest: mark present while the letter still
///    has a count left, absent otherwise
///
/// # Errors
/// Returns `LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_mask::core::{Word, assess};
///
/// let secret = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// assert_eq!(assess(&secret, &guess).unwrap().to_string(), "BGGYG");
/// ```
pub fn assess(secret: &Word, guess: &Word) -> Result<Assessment, LengthMismatch> {
    LengthMismatch::check(secret.len(), guess.len())?;

    let mut remaining = secret.letter_counts();
    let mut marks = vec![Mark::Absent; secret.len()];

    for (i, (&s, &g)) in secret.letters().iter().zip(guess.letters()).enumerate() {
        if s == g {
            marks[i] = Mark::Exact;
            remaining[letter_index(s)] -= 1;
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        let count = &mut remaining[letter_index(g)];
        if *count > 0 {
            marks[i] = Mark::Present;
            *count -= 1;
        }
    }

    Ok(Assessment::new(marks))
}
