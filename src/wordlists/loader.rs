//! Dictionary loading
//!
//! One word per line. Lines are trimmed and uppercased and blank lines are skipped.
//! The first entry fixes the word length; later entries of another length are
//! rejected rather than silently dropped.

use super::WORDS;
use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A validated word list whose entries all share one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
    word_len: usize,
}

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    Empty,
    InvalidWord {
        line: usize,
        source: WordError,
    },
    InconsistentLength {
        line: usize,
        word: String,
        expected: usize,
    },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read dictionary: {e}"),
            Self::Empty => write!(f, "Dictionary contains no words"),
            Self::InvalidWord { line, source } => write!(f, "Line {line}: {source}"),
            Self::InconsistentLength {
                line,
                word,
                expected,
            } => write!(
                f,
                "Line {line}: '{word}' has {} letters, expected {expected}",
                word.len()
            ),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
            Self::Empty | Self::InconsistentLength { .. } => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl Dictionary {
    /// Build a dictionary from lines of text
    ///
    /// # Errors
    /// Returns `DictionaryError` if no words are present, a line is not a word, or a
    /// word's length differs from the first word's. Line numbers are 1-based.
    ///
    /// # Examples
    /// ```
    /// use wordle_mask::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_lines(["crane", "", " slate "]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.words()[1].text(), "SLATE");
    ///
    /// assert!(Dictionary::from_lines(["crane", "cranes"]).is_err());
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Word> = Vec::new();

        for (i, line) in lines.into_iter().enumerate() {
            let line_no = i + 1;
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }

            let word = Word::new(trimmed).map_err(|source| DictionaryError::InvalidWord {
                line: line_no,
                source,
            })?;

            if let Some(first) = words.first()
                && first.len() != word.len()
            {
                return Err(DictionaryError::InconsistentLength {
                    line: line_no,
                    word: word.text().to_string(),
                    expected: first.len(),
                });
            }

            words.push(word);
        }

        let word_len = words.first().ok_or(DictionaryError::Empty)?.len();
        Ok(Self { words, word_len })
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list itself is malformed.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_lines(WORDS)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Letters per word, taken from the first entry
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, and the errors of
/// `Dictionary::from_lines` for its contents.
///
/// # Examples
/// ```no_run
/// use wordle_mask::wordlists::load_from_file;
///
/// let dictionary = load_from_file("sgb-words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let content = fs::read_to_string(path.as_ref())?;
    let dictionary = Dictionary::from_lines(content.lines())?;
    log::info!(
        "loaded {} words of {} letters from {}",
        dictionary.len(),
        dictionary.word_len(),
        path.as_ref().display()
    );
    Ok(dictionary)
}
