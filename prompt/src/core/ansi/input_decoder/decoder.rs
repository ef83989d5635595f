// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DecodeError, InputEvent};
use crate::{ANSI_CSI_BRACKET, ANSI_SS3_O, CSI_DOWN, CSI_LEFT, CSI_PARAM_DELETE,
            CSI_RIGHT, CSI_TILDE, CSI_UP, CTRL_C, CTRL_D, CTRL_L,
            IGNORED_CONTROL_CODES, KEY_BACKSPACE, KEY_ESC, KEY_RETURN, SS3_END, SS3_HOME,
            ok};
use std::{collections::VecDeque, io::Read};

/// Turns raw terminal input into [`InputEvent`]s, one event per call.
///
/// Events are classified independently of each other. The only thing carried between
/// calls is input that was read while looking for the rest of a malformed UTF-8 rune:
/// those bytes are handed out again before the reader is touched, so a keystroke that
/// follows a bad byte is never lost.
///
/// Use one decoder per input stream, for as long as the stream is read.
#[derive(Debug, Default)]
pub struct InputDecoder {
    pending: VecDeque<u8>,
}

impl InputDecoder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Read one event's worth of input from `reader` and classify it.
    ///
    /// Blocks until enough bytes are available. For an escape sequence that means the
    /// continuation bytes too: they are read from the same stream with no timeout, so
    /// a lone `ESC` keypress waits for two more keys.
    ///
    /// | Input                       | Event                         |
    /// |:----------------------------|:------------------------------|
    /// | `\r`, `Ctrl+D`              | [`InputEvent::EndOfLine`]     |
    /// | `Ctrl+C`                    | [`InputEvent::Interrupt`]     |
    /// | DEL (`0x7f`)                | [`InputEvent::BackspaceLeft`] |
    /// | `Ctrl+L`                    | [`InputEvent::ClearScreen`]   |
    /// | [`IGNORED_CONTROL_CODES`]   | [`InputEvent::Skip`]          |
    /// | `ESC O H` / `ESC O F`       | Home / End                    |
    /// | `ESC [ C` / `ESC [ D`       | Right / Left                  |
    /// | `ESC [ 3 ~`                 | [`InputEvent::DeleteForward`] |
    /// | any other escape sequence   | [`InputEvent::Skip`]          |
    /// | anything else               | [`InputEvent::Character`]     |
    ///
    /// # Errors
    ///
    /// - [`DecodeError::EndOfStream`] if the stream ends, including part way through
    ///   an escape sequence or a rune.
    /// - [`DecodeError::Io`] if a read fails.
    pub fn read_event<R: Read + ?Sized>(
        &mut self,
        reader: &mut R,
    ) -> Result<InputEvent, DecodeError> {
        let rune = self.read_rune(reader)?;

        let event = match rune {
            KEY_RETURN | CTRL_D => InputEvent::EndOfLine,
            CTRL_C => InputEvent::Interrupt,
            KEY_BACKSPACE => InputEvent::BackspaceLeft,
            CTRL_L => InputEvent::ClearScreen,
            KEY_ESC => self.read_escape_sequence(reader)?,
            it if IGNORED_CONTROL_CODES.contains(&it) => InputEvent::Skip,
            it => InputEvent::Character(it),
        };

        tracing::trace!(?event, "decoded input event");

        Ok(event)
    }

    /// Classify the bytes that follow `ESC`. Always reads exactly 2 bytes, plus exactly
    /// 1 more for `ESC [ <1..=6>`.
    fn read_escape_sequence<R: Read + ?Sized>(
        &mut self,
        reader: &mut R,
    ) -> Result<InputEvent, DecodeError> {
        let seq = [self.read_byte(reader)?, self.read_byte(reader)?];

        let event = match seq {
            // SS3: Home, End.
            [ANSI_SS3_O, SS3_HOME] => InputEvent::MoveHome,
            [ANSI_SS3_O, SS3_END] => InputEvent::MoveEnd,
            [ANSI_SS3_O, _] => InputEvent::Skip,

            // CSI: arrows.
            [ANSI_CSI_BRACKET, CSI_UP | CSI_DOWN] => InputEvent::Skip,
            [ANSI_CSI_BRACKET, CSI_RIGHT] => InputEvent::MoveRight,
            [ANSI_CSI_BRACKET, CSI_LEFT] => InputEvent::MoveLeft,

            // CSI: delete. Insert, page up, page down and the rest of `<n> ~` are
            // skipped.
            [ANSI_CSI_BRACKET, param @ b'1'..=b'6'] => {
                let terminator = self.read_byte(reader)?;
                if param == CSI_PARAM_DELETE && terminator == CSI_TILDE {
                    InputEvent::DeleteForward
                } else {
                    InputEvent::Skip
                }
            }

            _ => InputEvent::Skip,
        };

        ok!(event)
    }

    /// Read one UTF-8 encoded rune.
    ///
    /// Malformed input decodes to [`char::REPLACEMENT_CHARACTER`] and consumes only the
    /// lead byte. Anything read after it is pushed back and decoded on its own.
    fn read_rune<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<char, DecodeError> {
        let lead = self.read_byte(reader)?;

        let len = utf8_sequence_len(lead);
        if len == 1 {
            return ok!(char::from(lead));
        }
        if len == 0 {
            return ok!(char::REPLACEMENT_CHARACTER);
        }

        let mut bytes = [lead, 0, 0, 0];
        let mut filled = 1;
        while filled < len {
            let byte = self.read_byte(reader)?;
            bytes[filled] = byte;
            filled += 1;
            if !is_continuation_byte(byte) {
                self.unread(&bytes[1..filled]);
                return ok!(char::REPLACEMENT_CHARACTER);
            }
        }

        // Overlong encodings and surrogates pass the continuation check.
        match std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|it| it.chars().next())
        {
            Some(rune) => ok!(rune),
            None => {
                self.unread(&bytes[1..len]);
                ok!(char::REPLACEMENT_CHARACTER)
            }
        }
    }

    /// Put `bytes` back in front of any input that is still pending, in order.
    fn unread(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().rev() {
            self.pending.push_front(byte);
        }
    }

    /// Pending bytes first, then the reader. [`Read::read_exact`] retries on EINTR and
    /// reports a closed stream as [`std::io::ErrorKind::UnexpectedEof`], which maps to
    /// [`DecodeError::EndOfStream`].
    fn read_byte<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<u8, DecodeError> {
        if let Some(byte) = self.pending.pop_front() {
            return ok!(byte);
        }
        let mut byte = [0_u8; 1];
        reader.read_exact(&mut byte).map_err(DecodeError::from)?;
        ok!(byte[0])
    }
}

/// Number of bytes in the UTF-8 sequence that starts with `lead`, or 0 if `lead` can't
/// start a sequence (stray continuation byte, or `0xF8..`).
///
/// ```text
/// 0xxxxxxx  → 1
/// 110xxxxx  → 2
/// 1110xxxx  → 3
/// 11110xxx  → 4
/// ```
fn utf8_sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 0,
    }
}

/// `10xxxxxx`
fn is_continuation_byte(byte: u8) -> bool { matches!(byte, 0x80..=0xBF) }
