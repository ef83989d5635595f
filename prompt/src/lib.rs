// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios

//! # r3bl_prompt
//!
//! Read a single line of text from an interactive terminal, with in-place editing.
//!
//! ```no_run
//! use r3bl_prompt::{Terminal, basic, password};
//!
//! # fn main() -> miette::Result<()> {
//! // One-shot convenience functions open the terminal for you.
//! let name = basic("Name: ", true)?;
//! let secret = password("Password: ")?;
//!
//! // Or keep a handle around and run several sessions on it.
//! let mut terminal = Terminal::new();
//! let line = terminal.read_line("> ")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Keyboard shortcuts
//!
//! | Key                        | Effect                                             |
//! |:---------------------------|:---------------------------------------------------|
//! | `Enter` / `Ctrl+D`         | End the line                                       |
//! | `Ctrl+C`                   | End the line, return [`PromptError::Interrupted`]  |
//! | `Backspace`                | Remove the character to the left                   |
//! | `Delete`                   | Remove the character under the cursor              |
//! | `Ctrl+L`                   | Clear the screen, keep the line                    |
//! | `Home` / `End`             | Jump to the start / end of the line                |
//! | `Left` / `Right`           | Move one character                                 |
//!
//! Password entry ([`Terminal::read_password`]) only honors typing, `Backspace`,
//! `Enter`, `Ctrl+C` and `Ctrl+L`, and never draws what was typed.
//!
//! # Architecture
//!
//! ```text
//! prompt_api (basic, ask, custom, password)
//!    │
//!    ▼
//! Terminal ──────────────────────────────▶ FallbackReader (dumb terminal / no tty)
//!    │ RawModeGuard (enter → restore on drop)
//!    ▼
//! run_session ◀── InputDecoder (ESC sequence decoder)
//!    │
//!    ▼
//! LineBuffer (edit + minimal redraw, wrap aware)
//! ```
//!
//! If stdin is piped, the controlling terminal can't be opened, or `TERM` names a
//! terminal that can't handle the escape sequences (`dumb`, `cons25`), a plain line
//! reader is used instead.
//!
//! # Logging
//!
//! The library emits [`tracing`] events but never installs a subscriber. Use
//! [`try_initialize_logging_global`] with a [`TracingConfig`] if you want them. Log to a
//! file, since the terminal is in raw mode while a line is being edited.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]
// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod prompt_api;
pub mod prompt_impl;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
#[allow(ambiguous_glob_reexports)]
pub use core::*;
pub use prompt_api::*;
#[allow(ambiguous_glob_reexports)]
pub use prompt_impl::*;
