//! Interactive human assessment
//!
//! A person judges each guess by typing its code. The line is trimmed and
//! uppercased but not validated: `G` is exact, `Y` is present, anything else absent.

use crate::core::{Assessment, Word};
use crate::solver::{Assessor, GameError};
use std::io::{self, BufRead, Write};

/// Reads assessments line by line from `input`, prompting on `output`
pub struct PromptAssessor<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptAssessor<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Assessor for PromptAssessor<R, W> {
    fn assess(&mut self, _guess: &Word) -> Result<Assessment, GameError> {
        write!(self.output, "   < ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an assessment was entered",
            )
            .into());
        }

        Ok(Assessment::parse(&line.to_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn guess() -> Word {
        Word::new("crane").unwrap()
    }

    #[test]
    fn reads_one_line_per_guess() {
        let mut prompt = PromptAssessor::new(Cursor::new("gybbg\n  GGGGG  \n"), Vec::new());

        assert_eq!(prompt.assess(&guess()).unwrap().to_string(), "GYBBG");
        assert_eq!(prompt.assess(&guess()).unwrap().to_string(), "GGGGG");
        assert_eq!(String::from_utf8(prompt.output).unwrap(), "   <    < ");
    }

    #[test]
    fn malformed_input_passes_through() {
        let mut prompt = PromptAssessor::new(Cursor::new("gx?\n"), Vec::new());
        let assessment = prompt.assess(&guess()).unwrap();
        assert_eq!(assessment.to_string(), "GBB");
        assert_eq!(assessment.len(), 3);
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut prompt = PromptAssessor::new(Cursor::new(""), Vec::new());
        let err = prompt.assess(&guess()).unwrap_err();
        assert!(matches!(err, GameError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
