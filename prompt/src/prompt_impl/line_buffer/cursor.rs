// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineBuffer;
use crate::ok;
use std::io::{self, Write};

/// Cursor movement. These never rewrite content, they only move the terminal cursor
/// (up or down across wrapped rows, then to the column). Moving past either end of
/// the line does nothing, and writes nothing.
impl LineBuffer {
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_left(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor_offset == 0 {
            return ok!();
        }
        self.cursor_offset -= 1;
        self.reposition(term)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_right(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor_offset == self.content.len() {
            return ok!();
        }
        self.cursor_offset += 1;
        self.reposition(term)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_start(&mut self, term: &mut dyn Write) -> io::Result<()> {
        self.cursor_offset = 0;
        self.reposition(term)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_end(&mut self, term: &mut dyn Write) -> io::Result<()> {
        self.cursor_offset = self.content.len();
        self.reposition(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContentVisibility, core::test_fixtures::StdoutMock};
    use pretty_assertions::assert_eq;

    fn typed(prompt: &str, width: u16, text: &str, stdout_mock: &mut StdoutMock) -> LineBuffer {
        let mut buffer = LineBuffer::new(prompt, width, ContentVisibility::Shown);
        for ch in text.chars() {
            buffer.insert(ch, stdout_mock).unwrap();
        }
        stdout_mock.clear();
        buffer
    }

    #[test]
    fn test_move_left_then_right_is_identity() {
        let mut stdout_mock = StdoutMock::default();
        let mut buffer = typed("> ", 80, "abc", &mut stdout_mock);

        buffer.move_left(&mut stdout_mock).unwrap();
        assert_eq!(buffer.cursor_offset(), 2);
        buffer.move_right(&mut stdout_mock).unwrap();
        assert_eq!(buffer.cursor_offset(), 3);
        assert_eq!(buffer.as_string(), "abc");
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[5G\x1b[6G"
        );
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut stdout_mock = StdoutMock::default();
        let mut buffer = typed("> ", 80, "ab", &mut stdout_mock);

        buffer.move_right(&mut stdout_mock).unwrap();
        assert_eq!(buffer.cursor_offset(), 2);

        buffer.move_start(&mut stdout_mock).unwrap();
        stdout_mock.clear();
        buffer.move_left(&mut stdout_mock).unwrap();
        buffer.move_left(&mut stdout_mock).unwrap();
        assert_eq!(buffer.cursor_offset(), 0);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_home_and_end_across_wrapped_rows() {
        let mut stdout_mock = StdoutMock::default();
        let mut buffer = typed("", 10, "abcdefghijklmnopqrstuvwxy", &mut stdout_mock);
        assert_eq!(buffer.cursor_row(), 2);

        buffer.move_start(&mut stdout_mock).unwrap();
        assert_eq!(buffer.cursor_row(), 0);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[2A\x1b[1G");

        stdout_mock.clear();
        buffer.move_end(&mut stdout_mock).unwrap();
        assert_eq!(buffer.cursor_row(), 2);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[2B\x1b[6G");
    }

    #[test]
    fn test_move_left_across_row_boundary() {
        let mut stdout_mock = StdoutMock::default();
        let mut buffer = typed("", 10, "0123456789", &mut stdout_mock);
        assert_eq!(buffer.cursor_row(), 1);

        buffer.move_left(&mut stdout_mock).unwrap();

        assert_eq!(buffer.cursor_row(), 0);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[1A\x1b[10G");
    }
}
