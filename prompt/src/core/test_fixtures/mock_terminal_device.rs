// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::StdoutMock;
use crate::{TermSize, TerminalDevice};
use std::{io::{self, Cursor, Read, Write},
          sync::{Arc,
                 atomic::{AtomicUsize, Ordering}}};

/// How often raw mode was entered and restored. Shared between a
/// [`MockTerminalDevice`] and the test that inspects it.
#[derive(Debug, Default)]
pub struct RawModeCounters {
    entered: AtomicUsize,
    restored: AtomicUsize,
}

impl RawModeCounters {
    pub fn raw_mode_entered(&self) -> usize { self.entered.load(Ordering::SeqCst) }

    pub fn restored(&self) -> usize { self.restored.load(Ordering::SeqCst) }
}

/// A terminal with scripted keystrokes, a fixed size, and captured output.
#[derive(Debug)]
pub struct MockTerminalDevice {
    input: Cursor<Vec<u8>>,
    stdout_mock: StdoutMock,
    size: Option<TermSize>,
    counters: Arc<RawModeCounters>,
    is_terminal: bool,
    restore_fails: bool,
    reads_fail_after: Option<u64>,
    writes_fail_after: Option<u64>,
}

impl MockTerminalDevice {
    /// `size` is `(columns, rows)`.
    pub fn new(input: &str, size: (u16, u16)) -> Self {
        Self::with_bytes(input.as_bytes(), size)
    }

    pub fn with_bytes(input: &[u8], (columns, rows): (u16, u16)) -> Self {
        Self {
            input: Cursor::new(input.to_vec()),
            stdout_mock: StdoutMock::new(),
            size: Some(TermSize::new(columns, rows)),
            counters: Arc::default(),
            is_terminal: true,
            restore_fails: false,
            reads_fail_after: None,
            writes_fail_after: None,
        }
    }

    /// Raw mode and size queries fail, like they do on a pipe.
    pub fn not_a_terminal(mut self) -> Self {
        self.is_terminal = false;
        self.size = None;
        self
    }

    /// Raw mode works, but the size query fails.
    pub fn unknown_size(mut self) -> Self {
        self.size = None;
        self
    }

    pub fn failing_restore(mut self) -> Self {
        self.restore_fails = true;
        self
    }

    /// Reads fail with [`io::ErrorKind::BrokenPipe`] once `count` input bytes have been
    /// consumed, as if the device went away mid line.
    pub fn failing_reads_after(mut self, count: u64) -> Self {
        self.reads_fail_after = Some(count);
        self
    }

    /// Writes fail with [`io::ErrorKind::BrokenPipe`] once `count` input bytes have
    /// been consumed. Ties the output failure to a keystroke instead of to a number of
    /// escape sequence bytes.
    pub fn failing_writes_after(mut self, count: u64) -> Self {
        self.writes_fail_after = Some(count);
        self
    }

    pub fn counters(&self) -> Arc<RawModeCounters> { self.counters.clone() }

    pub fn stdout_mock(&self) -> StdoutMock { self.stdout_mock.clone() }

    /// Number of input bytes consumed so far.
    pub fn bytes_read(&self) -> u64 { self.input.position() }
}

impl TerminalDevice for MockTerminalDevice {
    type Snapshot = ();

    fn query_size(&self) -> io::Result<TermSize> {
        self.size.ok_or_else(|| {
            io::Error::new(io::ErrorKind::Unsupported, "size query not supported")
        })
    }

    fn enter_raw_mode(&mut self) -> io::Result<Self::Snapshot> {
        if !self.is_terminal {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "not a terminal"));
        }
        self.counters.entered.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn restore(&mut self, _snapshot: &Self::Snapshot) -> io::Result<()> {
        self.counters.restored.fetch_add(1, Ordering::SeqCst);
        if self.restore_fails {
            return Err(io::Error::other("restore failed"));
        }
        Ok(())
    }
}

impl Read for MockTerminalDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.reads_fail_after.is_some_and(|count| self.bytes_read() >= count) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "input device gone"));
        }
        self.input.read(buf)
    }
}

impl Write for MockTerminalDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.writes_fail_after.is_some_and(|count| self.bytes_read() >= count) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "output device gone"));
        }
        self.stdout_mock.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> { self.stdout_mock.flush() }
}
