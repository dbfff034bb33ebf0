//! Line-oriented prompting with parse-and-retry.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

/// Message shown when numeric input cannot be parsed.
pub const RETRY_MESSAGE: &str = "Invalid input. Please enter a number.";

/// Presentation-layer input failure.
#[derive(Debug, Error)]
pub enum InputError {
    /// Text could not be parsed into the requested value.
    #[error("invalid input `{input}`: {reason}")]
    Parse { input: String, reason: String },

    /// The input stream closed.
    #[error("end of input")]
    Eof,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InputError {
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

/// Parse trimmed text into `T`, reporting failure as [`InputError::Parse`].
pub fn parse_value<T>(raw: &str) -> Result<T, InputError>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = raw.trim();
    trimmed.parse::<T>().map_err(|e| InputError::Parse {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })
}

/// Prompts on `output` and reads answers line by line from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of output.
    pub fn say(&mut self, message: impl Display) -> Result<(), InputError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prompt until the answer parses as `T`.
    ///
    /// Parse failures print [`RETRY_MESSAGE`] and ask again; only end of input or
    /// an I/O failure ends the loop early.
    pub fn read_parsed<T>(&mut self, prompt: &str) -> Result<T, InputError>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse_value::<T>(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(error = %err, "re-prompting after parse failure");
                    self.say(RETRY_MESSAGE)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn read_line_strips_terminators_and_echoes_prompt() {
        let mut p = prompter("hello world\r\n");
        assert_eq!(p.read_line("> ").unwrap(), "hello world");
        assert_eq!(output(p), "> ");
    }

    #[test]
    fn read_line_keeps_inner_whitespace_and_empty_lines() {
        let mut p = prompter("\n  spaced  \n");
        assert_eq!(p.read_line("").unwrap(), "");
        assert_eq!(p.read_line("").unwrap(), "  spaced  ");
    }

    #[test]
    fn read_line_reports_eof() {
        let mut p = prompter("");
        assert!(p.read_line("> ").unwrap_err().is_eof());
    }

    #[test]
    fn read_parsed_retries_until_valid() {
        let mut p = prompter("abc\n4.5\n 42 \n");
        let value: i64 = p.read_parsed("n: ").unwrap();
        assert_eq!(value, 42);

        let out = output(p);
        assert_eq!(out.matches(RETRY_MESSAGE).count(), 2);
        assert_eq!(out.matches("n: ").count(), 3);
    }

    #[test]
    fn read_parsed_stops_at_eof() {
        let mut p = prompter("nope\n");
        let err = p.read_parsed::<i64>("n: ").unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn parse_value_reports_offending_text() {
        match parse_value::<u32>(" x1 ") {
            Err(InputError::Parse { input, .. }) => assert_eq!(input, "x1"),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }
}
