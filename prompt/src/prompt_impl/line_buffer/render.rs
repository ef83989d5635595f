// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::{LineBuffer, move_rows};
use crate::{CRLF, ContentVisibility, ok};
use crossterm::{QueueableCommand, cursor,
                terminal::{Clear, ClearType}};
use std::io::{self, Write};

impl LineBuffer {
    /// Redraw the prompt and content from the start of the prompt's first row, then
    /// put the cursor back where the cursor offset says it belongs.
    ///
    /// When the drawn text ends exactly on a row boundary a line break is written, so
    /// the terminal cursor isn't left in the pending-wrap state on the last column.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn refresh(&mut self, term: &mut dyn Write) -> io::Result<()> {
        move_rows(term, self.cursor_row, 0)?;
        term.queue(cursor::MoveToColumn(0))?;
        term.queue(Clear(ClearType::FromCursorDown))?;
        self.cursor_row = 0;

        term.write_all(self.prompt.as_bytes())?;
        if self.visibility == ContentVisibility::Shown {
            let content = self.as_string();
            term.write_all(content.as_bytes())?;
        }

        let total = self.rendered_width();
        let (end_row, end_col) = self.row_col(total);
        if total > 0 && end_row > 0 && end_col == 0 {
            term.write_all(CRLF.as_bytes())?;
        }
        self.cursor_row = end_row;

        self.reposition(term)?;

        ok!()
    }
}
