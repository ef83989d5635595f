// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PromptError, ok};
use std::{fmt,
          io::{self, BufRead, BufReader, Write}};

/// Plain line input, for when the terminal can't be driven with escape sequences (a
/// `dumb` terminal, or stdin that isn't a terminal at all).
///
/// The terminal does the editing (in cooked mode) or there is none. The prompt is
/// written, one line is read, and surrounding whitespace is trimmed.
pub struct FallbackReader {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl fmt::Debug for FallbackReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackReader").finish_non_exhaustive()
    }
}

impl FallbackReader {
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Read from stdin, write prompts to stdout.
    #[must_use]
    pub fn stdio() -> Self { Self::new(BufReader::new(io::stdin()), io::stdout()) }

    /// Write `prompt`, then read one line.
    ///
    /// Trailing `\r`, `\n` and spaces are removed, as are leading spaces.
    ///
    /// # Errors
    ///
    /// - [`PromptError::EndOfStream`] if input closes before a line terminator, with
    ///   whatever was read.
    /// - [`PromptError::Io`] if reading or writing fails.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.write_prompt(prompt)?;

        let mut line = String::new();
        let bytes_read =
            self.input
                .read_line(&mut line)
                .map_err(|source| PromptError::Io {
                    source,
                    partial_line: trim(&line),
                })?;

        if bytes_read == 0 || !line.ends_with('\n') {
            return Err(PromptError::EndOfStream {
                partial_line: trim(&line),
            });
        }

        ok!(trim(&line))
    }

    /// Same as [`read_line`](Self::read_line). There is no portable way to turn off
    /// echo without raw mode, so the input is visible.
    ///
    /// # Errors
    ///
    /// See [`read_line`](Self::read_line).
    pub fn read_password(&mut self, prompt: &str) -> Result<String, PromptError> {
        tracing::warn!("no terminal available, password input will be echoed");
        self.read_line(prompt)
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<(), PromptError> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|source| PromptError::Io {
                source,
                partial_line: String::new(),
            })
    }
}

fn trim(line: &str) -> String {
    line.trim_end_matches(['\r', '\n', ' '])
        .trim_start_matches(' ')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_fixtures::StdoutMock;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use test_case::test_case;

    fn reader(input: &str) -> (FallbackReader, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let reader = FallbackReader::new(
            Cursor::new(input.as_bytes().to_vec()),
            stdout_mock.clone(),
        );
        (reader, stdout_mock)
    }

    #[test_case("hello\n", "hello")]
    #[test_case("hello\r\n", "hello")]
    #[test_case("  hello  \n", "hello")]
    #[test_case("\thello\n", "\thello" ; "only spaces are trimmed")]
    #[test_case("\n", "")]
    fn test_read_line_trims(input: &str, expected: &str) {
        let (mut reader, _) = reader(input);
        assert_eq!(reader.read_line("> ").unwrap(), expected);
    }

    #[test]
    fn test_prompt_is_written() {
        let (mut reader, stdout_mock) = reader("x\n");
        reader.read_line("Name: ").unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "Name: ");
    }

    #[test]
    fn test_reads_one_line_at_a_time() {
        let (mut reader, _) = reader("one\ntwo\n");
        assert_eq!(reader.read_line("> ").unwrap(), "one");
        assert_eq!(reader.read_line("> ").unwrap(), "two");
        assert!(reader.read_line("> ").unwrap_err().is_end_of_stream());
    }

    #[test]
    fn test_missing_terminator_is_end_of_stream() {
        let (mut reader, _) = reader("partial ");
        let error = reader.read_line("> ").unwrap_err();
        assert!(error.is_end_of_stream());
        assert_eq!(error.partial_line(), Some("partial"));
    }

    #[test]
    fn test_password_reads_a_line() {
        let (mut reader, _) = reader("secret\n");
        assert_eq!(reader.read_password("Password: ").unwrap(), "secret");
    }
}
