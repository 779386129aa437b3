//! Knowledge state built from assessments
//!
//! A `Mask` keeps one `MaskCell` per letter (allowed positions plus occurrence
//! bounds) and the letters known to sit at each position.
//!
//! `update` recomputes the per-letter `min`/`max` bounds from the latest guess
//! only. Required letters and disallowed positions carry over between rounds.
//! Earlier bound information lives on in the already-filtered candidate list.

use super::assessment::{Assessment, Mark};
use super::word::{ALPHABET_LEN, LengthMismatch, Word, letter_index};

/// What is known about one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskCell {
    allowed: Vec<bool>,
    min: usize,
    max: usize,
}

impl MaskCell {
    fn new(word_len: usize) -> Self {
        Self {
            allowed: vec![true; word_len],
            min: 0,
            max: word_len,
        }
    }

    fn reset_bounds(&mut self) {
        self.min = 0;
        self.max = self.allowed.len();
    }

    /// Whether this letter may appear at `position` after `count` earlier occurrences
    ///
    /// # Panics
    /// Panics if `position` is not below the cell's word length
    #[inline]
    #[must_use]
    pub fn valid_at(&self, position: usize, count: usize) -> bool {
        self.max > count && self.allowed[position]
    }

    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[bool] {
        &self.allowed
    }

    /// Lower bound on occurrences
    #[inline]
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Upper bound on occurrences
    #[inline]
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }
}

/// Complete knowledge state for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    word_len: usize,
    cells: [MaskCell; ALPHABET_LEN],
    required: Vec<Option<u8>>,
}

impl Mask {
    /// An unconstrained mask for words of `word_len` letters
    ///
    /// # Examples
    /// ```
    /// use wordle_mask::core::{Mask, Word};
    ///
    /// let mask = Mask::new(5);
    /// assert!(mask.valid(&Word::new("crane").unwrap()));
    /// assert!(!mask.valid(&Word::new("cranes").unwrap()));
    /// ```
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        Self {
            word_len,
            cells: std::array::from_fn(|_| MaskCell::new(word_len)),
            required: vec![None; word_len],
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// The cell for an uppercase letter
    #[inline]
    #[must_use]
    pub const fn cell(&self, letter: u8) -> &MaskCell {
        &self.cells[letter_index(letter)]
    }

    /// The letter known to occupy `position`, if any
    ///
    /// # Panics
    /// Panics if `position >= self.word_len()`
    #[inline]
    #[must_use]
    pub fn required(&self, position: usize) -> Option<u8> {
        self.required[position]
    }

    /// Check the letter at `position`, counting it in `counts` on success
    ///
    /// # Panics
    /// Panics if `position` is out of range for either `word` or the mask. `valid`
    /// checks the length first and never panics.
    pub fn valid_at(&self, word: &Word, position: usize, counts: &mut [usize; ALPHABET_LEN]) -> bool {
        let letter = word.letter_at(position);
        if self.required[position].is_some_and(|r| r != letter) {
            return false;
        }
        let idx = letter_index(letter);
        if self.cells[idx].valid_at(position, counts[idx]) {
            counts[idx] += 1;
            return true;
        }
        false
    }

    /// Whether `word` is consistent with everything known
    ///
    /// Positions are scanned once, left to right, then every letter's count is
    /// checked against its lower bound.
    #[must_use]
    pub fn valid(&self, word: &Word) -> bool {
        if word.len() != self.word_len {
            return false;
        }
        let mut counts = [0; ALPHABET_LEN];
        (0..self.word_len).all(|pos| self.valid_at(word, pos, &mut counts))
            && self
                .cells
                .iter()
                .zip(counts)
                .all(|(cell, count)| count >= cell.min)
    }

    /// Fold one guess and its assessment into the mask
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the guess or the assessment length differs from
    /// the mask's word length. The mask is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_mask::core::{Mask, Word, assess};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let mut mask = Mask::new(5);
    /// mask.update(&guess, &assess(&secret, &guess).unwrap()).unwrap();
    ///
    /// assert!(mask.valid(&secret));
    /// assert!(!mask.valid(&guess));
    /// ```
    pub fn update(&mut self, guess: &Word, assessment: &Assessment) -> Result<(), LengthMismatch> {
        LengthMismatch::check(self.word_len, guess.len())?;
        LengthMismatch::check(self.word_len, assessment.len())?;

        for cell in &mut self.cells {
            cell.reset_bounds();
        }

        for (i, (&letter, &mark)) in guess.letters().iter().zip(assessment.marks()).enumerate() {
            let cell = &mut self.cells[letter_index(letter)];
            match mark {
                Mark::Exact => {
                    self.required[i] = Some(letter);
                    cell.min += 1;
                }
                Mark::Present => {
                    cell.min += 1;
                    cell.allowed[i] = false;
                }
                Mark::Absent => cell.max = cell.min,
            }
            if cell.min > cell.max {
                cell.max = cell.min;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assess;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn updated(secret: &str, guess: &str) -> Mask {
        let (s, g) = (word(secret), word(guess));
        let mut mask = Mask::new(s.len());
        mask.update(&g, &assess(&s, &g).unwrap()).unwrap();
        mask
    }

    #[test]
    fn fresh_mask_accepts_any_word_of_its_length() {
        let mask = Mask::new(5);
        assert!(mask.valid(&word("crane")));
        assert!(mask.valid(&word("zzzzz")));
        assert!(!mask.valid(&word("cat")));
        for letter in b'A'..=b'Z' {
            let cell = mask.cell(letter);
            assert_eq!((cell.min(), cell.max()), (0, 5));
            assert!(cell.allowed().iter().all(|&a| a));
        }
    }

    #[test]
    fn update_keeps_secret_and_drops_guess() {
        let mask = updated("crane", "trace");
        assert!(mask.valid(&word("crane")));
        assert!(!mask.valid(&word("trace")));

        assert_eq!(mask.required(1), Some(b'R'));
        assert_eq!(mask.required(2), Some(b'A'));
        assert_eq!(mask.required(4), Some(b'E'));
        assert_eq!(mask.required(0), None);
        assert_eq!(mask.cell(b'T').max(), 0);
        assert_eq!(mask.cell(b'C').min(), 1);
        assert!(!mask.cell(b'C').allowed()[3]);
    }

    #[test]
    fn duplicate_letters_bound_both_ways() {
        // LOLLY against ALLOW is YYGBB: exactly two L's, no Y
        let mask = updated("allow", "lolly");
        let l = mask.cell(b'L');
        assert_eq!((l.min(), l.max()), (2, 2));
        assert!(!l.allowed()[0]);
        assert_eq!(mask.cell(b'Y').max(), 0);

        assert!(mask.valid(&word("allow")));
        assert!(!mask.valid(&word("alloy")));
        assert!(!mask.valid(&word("lolly")));
    }

    #[test]
    fn absent_before_exact_raises_max_to_min() {
        // EEEEE against ABCDE is BBBBG: the absent E's cap max at 0 until the exact one
        let mask = updated("abcde", "eeeee");
        let e = mask.cell(b'E');
        assert_eq!((e.min(), e.max()), (1, 1));
        assert!(mask.valid(&word("abcde")));
        assert!(!mask.valid(&word("eeeee")));
    }

    #[test]
    fn bounds_reset_each_update_but_required_letters_persist() {
        let secret = word("crane");
        let mut mask = Mask::new(5);

        let first = word("trace");
        mask.update(&first, &assess(&secret, &first).unwrap()).unwrap();
        assert_eq!(mask.cell(b'T').max(), 0);

        let second = word("crash");
        mask.update(&second, &assess(&secret, &second).unwrap()).unwrap();

        // T is unbounded again: only the latest guess sets bounds
        assert_eq!(mask.cell(b'T').max(), 5);
        assert_eq!(mask.cell(b'E').min(), 0);
        // Required letters from the first round are still there
        assert_eq!(mask.required(4), Some(b'E'));
        assert_eq!(mask.required(0), Some(b'C'));
        // The disallowed position for C from the first round is kept too
        assert!(!mask.cell(b'C').allowed()[3]);
        assert!(mask.valid(&secret));
    }

    #[test]
    fn secret_is_never_excluded() {
        let words = [
            "crane", "trace", "allow", "lolly", "alloy", "eerie", "geese", "speed", "erase",
            "llama", "grape", "slate",
        ];
        for secret in words {
            for guess in words {
                let mask = updated(secret, guess);
                assert!(mask.valid(&word(secret)), "{guess} excluded {secret}");
            }
        }
    }

    #[test]
    fn secret_survives_a_sequence_of_rounds() {
        let secret = word("llama");
        let mut mask = Mask::new(5);
        for guess in ["allow", "lolly", "slate", "alarm"] {
            let g = word(guess);
            mask.update(&g, &assess(&secret, &g).unwrap()).unwrap();
            assert!(mask.valid(&secret));
        }
    }

    #[test]
    fn update_rejects_mismatched_lengths() {
        let mut mask = Mask::new(5);
        let before = mask.clone();

        let err = mask.update(&word("cranes"), &Assessment::parse("BBBBBB"));
        assert_eq!(err, Err(LengthMismatch { expected: 5, actual: 6 }));

        let err = mask.update(&word("crane"), &Assessment::parse("BBB"));
        assert_eq!(err, Err(LengthMismatch { expected: 5, actual: 3 }));

        assert_eq!(mask, before);
    }

    #[test]
    fn clone_is_independent() {
        let live = Mask::new(5);
        let mut hypothetical = live.clone();
        let g = word("crane");
        hypothetical
            .update(&g, &Assessment::parse("BBBBB"))
            .unwrap();

        assert!(live.valid(&g));
        assert!(!hypothetical.valid(&g));
    }

    #[test]
    fn valid_at_counts_only_accepted_letters() {
        let mask = updated("crane", "trace");
        let mut counts = [0; ALPHABET_LEN];
        assert!(mask.valid_at(&word("crane"), 0, &mut counts));
        assert_eq!(counts[letter_index(b'C')], 1);

        let mut counts = [0; ALPHABET_LEN];
        assert!(!mask.valid_at(&word("tramp"), 0, &mut counts));
        assert_eq!(counts.iter().sum::<usize>(), 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn valid_at_past_the_word_end_panics() {
        let mask = Mask::new(5);
        let mut counts = [0; ALPHABET_LEN];
        let _ = mask.valid_at(&word("cat"), 4, &mut counts);
    }

    #[test]
    fn valid_rejects_short_words_without_panicking() {
        let mask = Mask::new(5);
        assert!(!mask.valid(&word("cat")));
    }
}
