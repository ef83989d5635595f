// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr cfmakeraw icanon isig

//! Terminal raw mode, with guaranteed restore.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C sends SIGINT, Ctrl+D is EOF)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode**:
//! - No line buffering - bytes available immediately
//! - No special character processing - `Ctrl+C` arrives as byte `0x03`
//! - No echo - the prompt decides what appears on screen
//!
//! The line editor needs raw mode for all three reasons: it reads keys one at a time,
//! it handles `Ctrl+C` itself (so it can return the partial line), and it draws the
//! line itself (which is how password entry hides what was typed).
//!
//! ## Snapshot and restore
//!
//! [`TerminalDevice::enter_raw_mode`] captures the current attributes and returns them
//! as a snapshot before applying the raw variant. [`TerminalDevice::restore`] puts the
//! snapshot back. [`RawModeGuard`] ties the two together: create it to go raw, drop it
//! to restore. Drop runs on every exit path, including `?` early returns and panics.
//!
//! ```no_run
//! use r3bl_prompt::{RawModeGuard, TtyDevice};
//!
//! # fn main() -> std::io::Result<()> {
//! let mut device = TtyDevice::open()?;
//! {
//!     let _guard = RawModeGuard::new(&mut device)?;
//!     // Terminal is now in raw mode.
//! } // Original attributes restored here.
//! # Ok(())
//! # }
//! ```
//!
//! Only one guard can exist per device at a time (it holds `&mut`). Two devices that
//! point at the same terminal are not coordinated, so don't run two sessions against
//! one terminal concurrently.
//!
//! ## Platform Support
//!
//! - **Unix/Linux/macOS**: rustix's safe termios API (`tcgetattr`, `tcsetattr`)
//! - **Windows**: crossterm's console mode functions
//!
//! [`TerminalDevice::enter_raw_mode`]: crate::TerminalDevice::enter_raw_mode
//! [`TerminalDevice::restore`]: crate::TerminalDevice::restore

// Private modules (hide internal structure).
mod raw_mode_core;

#[cfg(unix)]
mod raw_mode_unix;

#[cfg(windows)]
mod raw_mode_windows;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;

#[cfg(unix)]
pub use raw_mode_unix::*;

#[cfg(windows)]
pub use raw_mode_windows::*;

// PTY based tests (Unix only).
#[cfg(all(unix, test))]
mod integration_tests;
