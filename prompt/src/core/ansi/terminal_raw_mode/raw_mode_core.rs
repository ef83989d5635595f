// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`RawModeGuard`] RAII wrapper.

use crate::TerminalDevice;
use std::{fmt,
          io,
          ops::{Deref, DerefMut}};

/// RAII guard that keeps a [`TerminalDevice`] in raw mode for as long as it lives.
///
/// Creating the guard enters raw mode and holds on to the snapshot of the original
/// attributes. Dropping it restores that snapshot, exactly once. A failed restore is
/// logged and otherwise ignored, so it can never hide the error that caused the guard
/// to be dropped early.
///
/// The guard derefs to the device, so reads and writes go through it while it's alive.
///
/// See [module documentation] for usage examples.
///
/// [module documentation]: mod@crate::core::ansi::terminal_raw_mode
pub struct RawModeGuard<'a, D: TerminalDevice> {
    device: &'a mut D,
    snapshot: D::Snapshot,
}

impl<'a, D: TerminalDevice> RawModeGuard<'a, D> {
    /// Enter raw mode on `device`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes can't be read or written, which is
    /// the case when the device is not a terminal. Nothing needs to be restored then.
    pub fn new(device: &'a mut D) -> io::Result<Self> {
        let snapshot = device.enter_raw_mode()?;
        tracing::debug!("entered raw mode");
        Ok(Self { device, snapshot })
    }
}

impl<D: TerminalDevice> Deref for RawModeGuard<'_, D> {
    type Target = D;

    fn deref(&self) -> &Self::Target { self.device }
}

impl<D: TerminalDevice> DerefMut for RawModeGuard<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.device }
}

impl<D: TerminalDevice> Drop for RawModeGuard<'_, D> {
    fn drop(&mut self) {
        match self.device.restore(&self.snapshot) {
            Ok(()) => tracing::debug!("restored terminal mode"),
            Err(error) => tracing::warn!(%error, "failed to restore terminal mode"),
        }
    }
}

impl<D: TerminalDevice> fmt::Debug for RawModeGuard<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawModeGuard").finish_non_exhaustive()
    }
}
