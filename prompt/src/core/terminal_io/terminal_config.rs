// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::IsTerminal;

/// Environment variable that names the terminal type.
pub const TERM_ENV_VAR: &str = "TERM";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

/// If you run `echo "test" | cargo run` the following will return
/// [`StdinIsPipedResult::StdinIsPiped`].
#[must_use]
pub fn is_stdin_piped() -> StdinIsPipedResult {
    if std::io::stdin().is_terminal() {
        StdinIsPipedResult::StdinIsNotPiped
    } else {
        StdinIsPipedResult::StdinIsPiped
    }
}

/// How lines are read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineInput {
    /// Raw mode line editing on the terminal.
    Editing,
    /// Plain lines from stdin, through the [`FallbackReader`].
    ///
    /// [`FallbackReader`]: crate::FallbackReader
    Plain,
}

/// Decides whether the terminal can be driven with escape sequences, or whether the
/// plain [`FallbackReader`] has to be used instead.
///
/// [`FallbackReader`]: crate::FallbackReader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Values of `TERM` that can't handle cursor movement sequences.
    pub unsupported_terms: Vec<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            unsupported_terms: vec!["dumb".into(), "cons25".into()],
        }
    }
}

impl TerminalConfig {
    /// An unset `TERM` counts as supported. Windows consoles usually don't set it.
    #[must_use]
    pub fn is_supported(&self, term: Option<&str>) -> bool {
        match term {
            None => true,
            Some(term) => !self
                .unsupported_terms
                .iter()
                .any(|unsupported| unsupported == term),
        }
    }

    /// Piped stdin is read as plain lines, so that `printf 'bob\n' | app` answers
    /// the prompt. Otherwise lines are edited, unless `term` is unsupported.
    ///
    /// A redirected stdout doesn't matter here: the editing session then draws on the
    /// controlling terminal.
    #[must_use]
    pub fn select_line_input(
        &self,
        term: Option<&str>,
        stdin: StdinIsPipedResult,
    ) -> LineInput {
        if let StdinIsPipedResult::StdinIsPiped = stdin {
            tracing::debug!("stdin is piped, using plain line input");
            return LineInput::Plain;
        }
        if !self.is_supported(term) {
            tracing::debug!(?term, "TERM is not supported, using plain line input");
            return LineInput::Plain;
        }
        LineInput::Editing
    }

    /// [`select_line_input`](Self::select_line_input) for the current process.
    #[must_use]
    pub fn select_line_input_by_env(&self) -> LineInput {
        let term = std::env::var(TERM_ENV_VAR).ok();
        self.select_line_input(term.as_deref(), is_stdin_piped())
    }
}
