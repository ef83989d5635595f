// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One line editing session: decode keystrokes, apply them to a [`LineBuffer`], stop
//! at end of line or `Ctrl+C`.
//!
//! The session doesn't touch terminal modes. Run it while a [`RawModeGuard`] is alive,
//! as [`Terminal`] does.
//!
//! [`RawModeGuard`]: crate::RawModeGuard
//! [`Terminal`]: crate::Terminal

use crate::{ContentVisibility, DecodeError, InputDecoder, InputEvent, LineBuffer,
            PromptError, TerminalDevice};
use std::io::{self, Write};

/// Which keys a session honors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditMode {
    /// Every event is applied, and typed characters are drawn.
    Full,
    /// Password entry. Only typing, backspace, end of line, interrupt and clear screen
    /// are applied, and typed characters are never drawn. Moving around a line you
    /// can't see makes no sense, so navigation keys are ignored.
    Restricted,
}

impl EditMode {
    #[must_use]
    pub fn visibility(self) -> ContentVisibility {
        match self {
            EditMode::Full => ContentVisibility::Shown,
            EditMode::Restricted => ContentVisibility::Hidden,
        }
    }

    #[must_use]
    pub fn honors(self, event: &InputEvent) -> bool {
        match self {
            EditMode::Full => true,
            EditMode::Restricted => matches!(
                event,
                InputEvent::Character(_)
                    | InputEvent::EndOfLine
                    | InputEvent::Interrupt
                    | InputEvent::BackspaceLeft
                    | InputEvent::ClearScreen
            ),
        }
    }
}

/// How an applied event affects the session.
enum Step {
    Continue,
    EndOfLine(String),
    Interrupted(String),
}

/// Run one session on `device` and return the line.
///
/// The terminal width is queried once up front. If the query fails the line is treated
/// as one unbounded row.
///
/// # Errors
///
/// - [`PromptError::Interrupted`] if the user pressed `Ctrl+C`.
/// - [`PromptError::EndOfStream`] if input closed before the line ended.
/// - [`PromptError::Io`] if reading or writing failed.
///
/// All of them carry the content typed so far.
pub fn run_session<D: TerminalDevice>(
    device: &mut D,
    prompt: &str,
    mode: EditMode,
) -> Result<String, PromptError> {
    let column_width = match device.query_size() {
        Ok(size) => size.col_width,
        Err(error) => {
            tracing::debug!(%error, "terminal size unknown, line will not wrap");
            0
        }
    };
    tracing::debug!(?mode, column_width, "line editing session started");

    let mut decoder = InputDecoder::new();
    let mut buffer = LineBuffer::new(prompt, column_width, mode.visibility());
    buffer
        .refresh(device)
        .map_err(|source| io_failure(source, &buffer))?;

    loop {
        let event = match decoder.read_event(device) {
            Ok(event) => event,
            Err(DecodeError::EndOfStream) => {
                tracing::debug!("input closed during session");
                return Err(PromptError::EndOfStream {
                    partial_line: buffer.as_string(),
                });
            }
            Err(DecodeError::Io(source)) => return Err(io_failure(source, &buffer)),
        };

        if !mode.honors(&event) {
            tracing::trace!(?event, "ignored in restricted mode");
            continue;
        }

        match apply_event(&mut buffer, event, device)
            .map_err(|source| io_failure(source, &buffer))?
        {
            Step::Continue => {}
            Step::EndOfLine(line) => {
                tracing::debug!("line editing session finished");
                return Ok(line);
            }
            Step::Interrupted(partial_line) => {
                tracing::debug!("line editing session interrupted");
                return Err(PromptError::Interrupted { partial_line });
            }
        }
    }
}

fn apply_event(
    buffer: &mut LineBuffer,
    event: InputEvent,
    term: &mut dyn Write,
) -> io::Result<Step> {
    match event {
        InputEvent::Character(ch) => buffer.insert(ch, term)?,
        InputEvent::EndOfLine => return Ok(Step::EndOfLine(buffer.end_line(term)?)),
        InputEvent::Interrupt => return Ok(Step::Interrupted(buffer.end_line(term)?)),
        InputEvent::BackspaceLeft => buffer.delete_left(term)?,
        InputEvent::DeleteForward => buffer.delete_forward(term)?,
        InputEvent::ClearScreen => buffer.clear_screen(term)?,
        InputEvent::MoveHome => buffer.move_start(term)?,
        InputEvent::MoveEnd => buffer.move_end(term)?,
        InputEvent::MoveLeft => buffer.move_left(term)?,
        InputEvent::MoveRight => buffer.move_right(term)?,
        InputEvent::Skip => {}
    }
    Ok(Step::Continue)
}

fn io_failure(source: io::Error, buffer: &LineBuffer) -> PromptError {
    PromptError::Io {
        source,
        partial_line: buffer.as_string(),
    }
}
