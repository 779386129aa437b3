//! Core domain types for Wordle
//!
//! Words, assessments and the constraint mask. Everything here is pure and
//! deterministic; randomness and I/O live in `solver` and `commands`.

mod assessment;
mod mask;
mod word;

pub use assessment::{Assessment, Mark, assess};
pub use mask::{Mask, MaskCell};
pub use word::{ALPHABET_LEN, LengthMismatch, Word, WordError, letter_index};
