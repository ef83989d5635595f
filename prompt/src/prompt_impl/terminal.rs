// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditMode, FallbackReader, LineInput, PromptError, RawModeGuard,
            TerminalConfig, TerminalDevice, TtyDevice, run_session};
use std::fmt;

/// A handle to read lines from. Each [`read_line`] or [`read_password`] call runs one
/// editing session with the terminal in raw mode, and restores it before returning.
///
/// If line editing isn't possible the handle reads plain lines through a
/// [`FallbackReader`] instead:
/// - [`Terminal::new`] picks the fallback up front when stdin is piped, when there is
///   no terminal, or when `TERM` names one that doesn't understand cursor movement.
/// - A device that refuses raw mode later uses the fallback given to
///   [`or_fallback`], or fails with [`PromptError::NotATerminal`] if there is none.
///
/// Two handles must not run sessions on the same terminal at the same time.
///
/// [`read_line`]: Self::read_line
/// [`read_password`]: Self::read_password
/// [`or_fallback`]: Self::or_fallback
pub struct Terminal<D: TerminalDevice = TtyDevice> {
    backend: Backend<D>,
}

enum Backend<D> {
    Editing {
        device: D,
        fallback: Option<FallbackReader>,
    },
    Fallback(FallbackReader),
}

impl Terminal<TtyDevice> {
    /// Open the controlling terminal, using the default [`TerminalConfig`].
    #[must_use]
    pub fn new() -> Self { Self::new_with_config(&TerminalConfig::default()) }

    /// Plain lines are read from stdin when it is piped, or when `TERM` isn't
    /// supported. See [`TerminalConfig::select_line_input`].
    #[must_use]
    pub fn new_with_config(config: &TerminalConfig) -> Self {
        if let LineInput::Plain = config.select_line_input_by_env() {
            return Self::with_fallback(FallbackReader::stdio());
        }

        match TtyDevice::open() {
            Ok(device) => Self::with_device(device).or_fallback(FallbackReader::stdio()),
            Err(error) => {
                tracing::debug!(%error, "no terminal, using plain line input");
                Self::with_fallback(FallbackReader::stdio())
            }
        }
    }
}

impl Default for Terminal<TtyDevice> {
    fn default() -> Self { Self::new() }
}

impl<D: TerminalDevice> Terminal<D> {
    /// Edit lines on `device`. There is no fallback unless [`or_fallback`] adds one.
    ///
    /// [`or_fallback`]: Self::or_fallback
    pub fn with_device(device: D) -> Self {
        Self {
            backend: Backend::Editing {
                device,
                fallback: None,
            },
        }
    }

    /// Never edit, always read plain lines from `fallback`.
    pub fn with_fallback(fallback: FallbackReader) -> Self {
        Self {
            backend: Backend::Fallback(fallback),
        }
    }

    /// Read from `fallback` whenever the device can't be put in raw mode.
    #[must_use]
    pub fn or_fallback(self, fallback: FallbackReader) -> Self {
        match self.backend {
            Backend::Editing { device, .. } => Self {
                backend: Backend::Editing {
                    device,
                    fallback: Some(fallback),
                },
            },
            Backend::Fallback(_) => Self::with_fallback(fallback),
        }
    }

    /// Whether sessions can edit lines (rather than always reading plain lines).
    #[must_use]
    pub fn is_editing(&self) -> bool { matches!(self.backend, Backend::Editing { .. }) }

    /// Read a line with full editing.
    ///
    /// # Errors
    ///
    /// See [`PromptError`]. The terminal mode is restored in every case.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.run(prompt, EditMode::Full)
    }

    /// Read a line without drawing what is typed, and with navigation keys disabled.
    ///
    /// # Errors
    ///
    /// See [`PromptError`]. The terminal mode is restored in every case.
    pub fn read_password(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.run(prompt, EditMode::Restricted)
    }

    fn run(&mut self, prompt: &str, mode: EditMode) -> Result<String, PromptError> {
        match &mut self.backend {
            Backend::Fallback(fallback) => read_plain(fallback, prompt, mode),
            Backend::Editing { device, fallback } => {
                let mut guard = match RawModeGuard::new(device) {
                    Ok(guard) => guard,
                    Err(source) => {
                        return match fallback {
                            Some(fallback) => {
                                tracing::debug!(
                                    %source,
                                    "can't enter raw mode, using plain line input"
                                );
                                read_plain(fallback, prompt, mode)
                            }
                            None => Err(PromptError::NotATerminal { source }),
                        };
                    }
                };
                run_session(&mut *guard, prompt, mode)
            }
        }
    }
}

fn read_plain(
    fallback: &mut FallbackReader,
    prompt: &str,
    mode: EditMode,
) -> Result<String, PromptError> {
    match mode {
        EditMode::Full => fallback.read_line(prompt),
        EditMode::Restricted => fallback.read_password(prompt),
    }
}

impl<D: TerminalDevice> fmt::Debug for Terminal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("is_editing", &self.is_editing())
            .finish_non_exhaustive()
    }
}
