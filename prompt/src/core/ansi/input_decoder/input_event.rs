// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// One logical keystroke, as far as line editing is concerned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A character to insert at the cursor.
    Character(char),
    /// Recognized input that has no effect on the line (tab, most `Ctrl+<letter>`,
    /// up/down arrows, unknown escape sequences, ...).
    Skip,
    /// Enter or `Ctrl+D`.
    EndOfLine,
    /// `Ctrl+C`.
    Interrupt,
    /// Backspace.
    BackspaceLeft,
    /// `Ctrl+L`.
    ClearScreen,
    /// Home key.
    MoveHome,
    /// End key.
    MoveEnd,
    /// Right arrow.
    MoveRight,
    /// Left arrow.
    MoveLeft,
    /// Delete key.
    DeleteForward,
}

/// Failure to read an event from the input stream.
///
/// End of stream gets its own variant so the caller can tell "no more input" apart
/// from a broken device. This includes a stream that ends in the middle of an escape
/// sequence.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input stream closed.
    #[error("end of input stream")]
    EndOfStream,

    /// The underlying read failed.
    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for DecodeError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof => DecodeError::EndOfStream,
            _ => DecodeError::Io(error),
        }
    }
}
