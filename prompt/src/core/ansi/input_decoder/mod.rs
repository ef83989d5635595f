// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Blocking decoder that turns raw terminal input into line editing events.
//!
//! Each call to [`InputDecoder::read_event`] consumes exactly one event's worth of
//! bytes from the stream and classifies it as an [`InputEvent`]. Events don't depend on
//! each other. The decoder only holds on to bytes it read past a malformed UTF-8 rune,
//! and hands those out again first.
//!
//! ```text
//! Raw bytes (tty in raw mode)
//!    │
//! ┌──▼──────────────────────────────┐
//! │ read_rune()                     │  1-4 bytes → char (UTF-8),
//! │                                 │  bad rune → U+FFFD, lead byte only
//! └──┬──────────────────────────────┘
//!    │ ESC?
//!    ├─ no  → control code table / plain character
//!    └─ yes → read exactly 2 more bytes
//!             └─ ESC [ 1..6 → read exactly 1 more byte
//!    │
//!    ▼
//! InputEvent
//! ```
//!
//! Lookahead is fixed length: an escape sequence always costs 3 bytes, or 4 when the
//! byte after `[` is a digit in `1..=6`, whether or not the sequence is recognized.
//! This keeps the stream position deterministic even for keys that aren't supported
//! (they decode to [`InputEvent::Skip`]).

// Attach.
mod decoder;
mod input_event;

// Re-export.
pub use decoder::*;
pub use input_event::*;
