// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Why a prompt didn't produce a line.
///
/// Everything except [`NotATerminal`] carries whatever had been typed when the session
/// ended, so it is never lost. Use [`partial_line()`] to get at it regardless of the
/// variant.
///
/// [`NotATerminal`]: Self::NotATerminal
/// [`partial_line()`]: Self::partial_line
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PromptError {
    /// The device can't be put in raw mode, and no fallback reader is configured.
    #[error("Not a terminal")]
    #[diagnostic(
        code(r3bl_prompt::not_a_terminal),
        help(
            "Run the program in an interactive terminal, or use `Terminal::new()` \
             which falls back to plain line input"
        )
    )]
    NotATerminal {
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed")]
    #[diagnostic(code(r3bl_prompt::io))]
    Io {
        #[source]
        source: io::Error,
        partial_line: String,
    },

    /// Input closed before the line was ended.
    #[error("Input closed before the end of the line")]
    #[diagnostic(code(r3bl_prompt::end_of_stream))]
    EndOfStream { partial_line: String },

    /// The user pressed `Ctrl+C`.
    #[error("Interrupted")]
    #[diagnostic(code(r3bl_prompt::interrupted))]
    Interrupted { partial_line: String },
}

impl PromptError {
    /// What had been typed when the session ended, if there was a session.
    #[must_use]
    pub fn partial_line(&self) -> Option<&str> {
        match self {
            PromptError::NotATerminal { .. } => None,
            PromptError::Io { partial_line, .. }
            | PromptError::EndOfStream { partial_line }
            | PromptError::Interrupted { partial_line } => Some(partial_line),
        }
    }

    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        matches!(self, PromptError::Interrupted { .. })
    }

    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, PromptError::EndOfStream { .. })
    }
}
