// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineBuffer;
use crate::{CRLF, ok};
use crossterm::{QueueableCommand, cursor,
                terminal::{Clear, ClearType}};
use std::io::{self, Write};

impl LineBuffer {
    /// Insert `ch` at the cursor and advance past it. Everything after the cursor
    /// shifts right, so the whole line is redrawn.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn insert(&mut self, ch: char, term: &mut dyn Write) -> io::Result<()> {
        self.content.insert(self.cursor_offset, ch);
        self.cursor_offset += 1;
        self.refresh(term)
    }

    /// Backspace. Does nothing at the start of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn delete_left(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor_offset == 0 {
            return ok!();
        }
        self.cursor_offset -= 1;
        self.content.remove(self.cursor_offset);
        self.refresh(term)
    }

    /// Delete the character under the cursor. Does nothing at the end of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn delete_forward(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor_offset == self.content.len() {
            return ok!();
        }
        self.content.remove(self.cursor_offset);
        self.refresh(term)
    }

    /// Clear the whole screen and redraw the line at the top.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn clear_screen(&mut self, term: &mut dyn Write) -> io::Result<()> {
        term.queue(Clear(ClearType::All))?;
        term.queue(cursor::MoveTo(0, 0))?;
        self.cursor_row = 0;
        self.refresh(term)
    }

    /// Finish editing: move past the end of the content and start a new line, so
    /// whatever is printed next doesn't overwrite it. Returns the content.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn end_line(&mut self, term: &mut dyn Write) -> io::Result<String> {
        self.move_end(term)?;
        term.write_all(CRLF.as_bytes())?;
        term.flush()?;
        ok!(self.as_string())
    }
}
