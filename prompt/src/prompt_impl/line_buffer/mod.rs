// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line being edited, and how it is drawn.
//!
//! [`LineBuffer`] owns the characters typed so far and a cursor offset into them. Every
//! edit both mutates that state and writes the escape sequences that bring the
//! terminal up to date, so the screen never has to be diffed.
//!
//! # Architecture
//!
//! | Module   | Responsibility                                                   |
//! |----------|------------------------------------------------------------------|
//! | `core`   | [`LineBuffer`] struct, [`ContentVisibility`], wrap arithmetic    |
//! | `edit`   | Insert, delete left / forward, clear screen, end of line         |
//! | `cursor` | Home, End, Left, Right (reposition only, nothing is rewritten)   |
//! | `render` | Full redraw of prompt + content, accounting for wrapped rows     |
//!
//! # Coordinates
//!
//! The prompt and the content are laid out as one run of cells that starts at column
//! 0 of the prompt's first row. Cell `n` sits at row `n / width` and column
//! `n % width`. Each character counts as one cell (no wide character support). A
//! width of 0 means the size is unknown, and everything is treated as a single row.
//!
//! The buffer remembers which of those rows the terminal cursor is on, so it can get
//! back to the start of the prompt with one relative move before a redraw.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules organized by functional responsibility.
mod core;
mod cursor;
mod edit;
mod render;

// Public re-exports (expose stable API).
pub use core::*;
