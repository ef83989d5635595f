// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Read, Write};

/// Width and height of a terminal, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermSize {
    pub col_width: u16,
    pub row_height: u16,
}

impl TermSize {
    #[must_use]
    pub fn new(col_width: u16, row_height: u16) -> Self {
        Self {
            col_width,
            row_height,
        }
    }
}

/// A terminal that a line can be edited on.
///
/// Bytes typed by the user are read through [`Read`], and the redraw output goes
/// through [`Write`]. The attribute handling is platform specific, so each
/// implementation picks its own [`Snapshot`](Self::Snapshot) type: on Unix it is the
/// saved `termios`, on Windows crossterm remembers the console mode itself and the
/// snapshot is `()`.
///
/// Use [`RawModeGuard`] rather than calling [`enter_raw_mode`] and [`restore`] by
/// hand, so the restore happens on every exit path.
///
/// [`RawModeGuard`]: crate::RawModeGuard
/// [`enter_raw_mode`]: Self::enter_raw_mode
/// [`restore`]: Self::restore
pub trait TerminalDevice: Read + Write {
    type Snapshot;

    /// Current size of the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the device doesn't support a size query, which is the case
    /// when it is not a real terminal.
    fn query_size(&self) -> io::Result<TermSize>;

    /// Save the current attributes, then switch to raw mode (no canonical line
    /// processing, no echo, no signal generating keys).
    ///
    /// # Errors
    ///
    /// Returns an error if the attributes can't be read or applied.
    fn enter_raw_mode(&mut self) -> io::Result<Self::Snapshot>;

    /// Re-apply attributes saved by [`enter_raw_mode`](Self::enter_raw_mode).
    ///
    /// # Errors
    ///
    /// Returns an error if the attributes can't be applied.
    fn restore(&mut self, snapshot: &Self::Snapshot) -> io::Result<()>;
}
