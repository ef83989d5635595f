// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{QueueableCommand, cursor};
use std::{cmp::Ordering,
          io::{self, Write}};

/// Whether typed characters are drawn. Password entry uses [`Self::Hidden`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContentVisibility {
    Shown,
    Hidden,
}

/// The line being edited. See the [module docs](super) for the coordinate system.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    pub(super) prompt: String,

    /// Display width of the prompt, with color codes stripped.
    pub(super) prompt_width: usize,

    pub(super) content: Vec<char>,

    /// Index into `content`, `0..=content.len()`.
    pub(super) cursor_offset: usize,

    /// Columns per terminal row, `0` if unknown.
    pub(super) column_width: usize,

    pub(super) visibility: ContentVisibility,

    /// Row of the terminal cursor, relative to the prompt's first row.
    pub(super) cursor_row: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        column_width: u16,
        visibility: ContentVisibility,
    ) -> Self {
        let prompt = prompt.into();
        let prompt_width = strip_ansi_escapes::strip_str(&prompt).chars().count();
        Self {
            prompt,
            prompt_width,
            content: Vec::new(),
            cursor_offset: 0,
            column_width: usize::from(column_width),
            visibility,
            cursor_row: 0,
        }
    }

    /// The content typed so far. Safe to call at any time, including after an error.
    #[must_use]
    pub fn as_string(&self) -> String { self.content.iter().collect() }

    #[must_use]
    pub fn len(&self) -> usize { self.content.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    #[must_use]
    pub fn cursor_offset(&self) -> usize { self.cursor_offset }

    #[must_use]
    pub fn cursor_row(&self) -> usize { self.cursor_row }

    #[must_use]
    pub fn is_hidden(&self) -> bool { self.visibility == ContentVisibility::Hidden }

    /// Number of cells taken by the prompt and whatever content is drawn.
    #[must_use]
    pub fn rendered_width(&self) -> usize {
        if self.is_hidden() {
            self.prompt_width
        } else {
            self.prompt_width + self.content.len()
        }
    }

    /// Number of terminal rows the rendered prompt and content take up.
    #[must_use]
    pub fn rows_occupied(&self) -> usize {
        match (self.column_width, self.rendered_width()) {
            (0, _) | (_, 0) => 1,
            (width, total) => (total - 1) / width + 1,
        }
    }

    /// Cell the terminal cursor belongs on. When the content is hidden the cursor
    /// stays right after the prompt.
    pub(super) fn cursor_cell(&self) -> usize {
        if self.is_hidden() {
            self.prompt_width
        } else {
            self.prompt_width + self.cursor_offset
        }
    }

    /// `(row, column)` of `cell`.
    pub(super) fn row_col(&self, cell: usize) -> (usize, usize) {
        match self.column_width {
            0 => (0, cell),
            width => (cell / width, cell % width),
        }
    }

    /// Move the terminal cursor to the cell implied by the cursor offset, then flush.
    pub(super) fn reposition(&mut self, term: &mut dyn Write) -> io::Result<()> {
        let (row, col) = self.row_col(self.cursor_cell());
        move_rows(term, self.cursor_row, row)?;
        term.queue(cursor::MoveToColumn(as_u16(col)))?;
        self.cursor_row = row;
        term.flush()
    }
}

/// Relative vertical move, nothing is emitted when `from == to`.
pub(super) fn move_rows(term: &mut dyn Write, from: usize, to: usize) -> io::Result<()> {
    match to.cmp(&from) {
        Ordering::Less => {
            term.queue(cursor::MoveUp(as_u16(from - to)))?;
        }
        Ordering::Greater => {
            term.queue(cursor::MoveDown(as_u16(to - from)))?;
        }
        Ordering::Equal => {}
    }
    Ok(())
}

/// Terminal coordinates are `u16`. Anything past that can't be addressed anyway.
pub(super) fn as_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }
