// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr tcgetwinsize winsize cfmakeraw

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use crate::{TermSize, ok};
use rustix::{fd::AsFd,
             termios::{self, OptionalActions, Termios}};
use std::io;

/// Put the terminal behind `fd` in raw mode, and return the attributes it had before.
///
/// Uses rustix's type-safe termios API to:
/// 1. Read the current attributes (this is the snapshot that is returned)
/// 2. Disable canonical mode, echo, and signal generation
/// 3. Set VMIN=1, VTIME=0 for immediate byte-by-byte reading
/// 4. Apply the new attributes
///
/// # Errors
///
/// Returns an error if `fd` is not a terminal (`ENOTTY`) or the attributes can't be
/// applied.
pub fn enter_raw_mode(fd: impl AsFd) -> io::Result<Termios> {
    let original = termios::tcgetattr(&fd)?;

    // Use rustix's built-in make_raw() method which correctly implements cfmakeraw
    // behavior. This is the same approach crossterm uses. It handles:
    // - Disabling canonical mode (ICANON)
    // - Disabling signal generation (ISIG), so Ctrl+C arrives as 0x03
    // - Disabling echo (ECHO, ECHONL)
    // - Disabling CR to NL translation (ICRNL), so Enter arrives as '\r'
    // - Setting special character processing (VMIN=1, VTIME=0)
    let mut raw = original.clone();
    raw.make_raw();

    termios::tcsetattr(&fd, OptionalActions::Now, &raw)?;

    ok!(original)
}

/// Re-apply a snapshot returned by [`enter_raw_mode`].
///
/// # Errors
///
/// Returns an error if the attributes can't be applied.
pub fn restore_terminal_mode(fd: impl AsFd, snapshot: &Termios) -> io::Result<()> {
    termios::tcsetattr(&fd, OptionalActions::Now, snapshot)?;
    ok!()
}

/// Query the size of the terminal behind `fd` with `tcgetwinsize()`.
///
/// # Errors
///
/// Returns an error if `fd` is not a terminal.
pub fn query_terminal_size(fd: impl AsFd) -> io::Result<TermSize> {
    let winsize = termios::tcgetwinsize(&fd)?;
    ok!(TermSize::new(winsize.ws_col, winsize.ws_row))
}

/// Whether `fd` refers to a terminal.
#[must_use]
pub fn is_a_terminal(fd: impl AsFd) -> bool { termios::isatty(fd) }
