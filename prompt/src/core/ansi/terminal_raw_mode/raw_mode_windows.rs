// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Windows implementation of raw mode using Crossterm.
//!
//! On Windows, we delegate to Crossterm's raw mode implementation which handles
//! the Windows Console API (`SetConsoleMode()`) correctly. Crossterm keeps the
//! original console mode itself, so there is no snapshot to hand back.

use crate::TermSize;
use std::io;

/// Enable raw mode on Windows using Crossterm.
///
/// Delegates to [`crossterm::terminal::enable_raw_mode()`] which disables:
/// - `ENABLE_LINE_INPUT` - line buffering
/// - `ENABLE_ECHO_INPUT` - character echo
/// - `ENABLE_PROCESSED_INPUT` - Ctrl+C handling
///
/// # Errors
///
/// Returns an error if the console mode cannot be changed.
pub fn enter_raw_mode() -> io::Result<()> { crossterm::terminal::enable_raw_mode() }

/// Restore the console mode saved by [`enter_raw_mode`].
///
/// # Errors
///
/// Returns an error if the console mode cannot be restored.
pub fn restore_terminal_mode() -> io::Result<()> { crossterm::terminal::disable_raw_mode() }

/// Query the console size.
///
/// # Errors
///
/// Returns an error if there is no console attached.
pub fn query_terminal_size() -> io::Result<TermSize> {
    let (columns, rows) = crossterm::terminal::size()?;
    Ok(TermSize::new(columns, rows))
}
