// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr icanon openpty

//! PTY-based integration tests for raw mode.
//!
//! These open a real pseudo-terminal pair with `portable-pty` and drive the slave side
//! through [`TtyDevice`], so the termios calls hit an actual line discipline.

use super::*;
use crate::{TermSize, TerminalDevice, TtyDevice};
use portable_pty::{PtyPair, PtySize, native_pty_system};
use pretty_assertions::assert_eq;
use rustix::termios::{self, LocalModes};
use serial_test::serial;
use std::fs::OpenOptions;

const PTY_COLS: u16 = 57;
const PTY_ROWS: u16 = 13;

/// Returns `None` when the environment can't allocate a PTY (some CI sandboxes).
fn open_pty() -> Option<(PtyPair, TtyDevice)> {
    let pty_system = native_pty_system();
    let pair = match pty_system.openpty(PtySize {
        rows: PTY_ROWS,
        cols: PTY_COLS,
        pixel_width: 0,
        pixel_height: 0,
    }) {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("⚠️  Skipping PTY test, openpty failed: {err}");
            return None;
        }
    };

    let slave_path = pair.master.tty_name()?;
    let slave = OpenOptions::new()
        .read(true)
        .write(true)
        .open(&slave_path)
        .expect("Failed to open slave side of PTY");
    let device = TtyDevice::from_file(slave).expect("Failed to wrap PTY slave");

    Some((pair, device))
}

#[test]
#[serial]
fn test_raw_mode_flags_applied_and_restored() {
    let Some((_pair, mut device)) = open_pty() else { return };

    let before = termios::tcgetattr(device.input_fd()).expect("tcgetattr before");
    assert!(before.local_modes.contains(LocalModes::ICANON));
    assert!(before.local_modes.contains(LocalModes::ECHO));

    {
        let guard = RawModeGuard::new(&mut device).expect("Failed to enter raw mode");
        let during = termios::tcgetattr(guard.input_fd()).expect("tcgetattr during");
        assert!(!during.local_modes.contains(LocalModes::ICANON));
        assert!(!during.local_modes.contains(LocalModes::ECHO));
        assert!(!during.local_modes.contains(LocalModes::ISIG));
    }

    let after = termios::tcgetattr(device.input_fd()).expect("tcgetattr after");
    assert_eq!(before.local_modes, after.local_modes);
    assert_eq!(before.input_modes, after.input_modes);
    assert_eq!(before.output_modes, after.output_modes);
}

#[test]
#[serial]
fn test_query_size_matches_pty() {
    let Some((_pair, device)) = open_pty() else { return };

    let size = device.query_size().expect("Failed to query PTY size");
    assert_eq!(size, TermSize::new(PTY_COLS, PTY_ROWS));
}

#[test]
#[serial]
fn test_regular_file_is_not_a_terminal() {
    let path = std::env::temp_dir().join("r3bl_prompt_not_a_tty.txt");
    std::fs::write(&path, b"").expect("Failed to create temp file");
    let file = std::fs::File::open(&path).expect("Failed to open temp file");

    let result = TtyDevice::from_file(file);
    assert!(result.is_err());

    std::fs::remove_file(&path).ok();
}
