// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod ansi;
pub mod decl_macros;
pub mod log;
pub mod terminal_io;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use log::*;
pub use terminal_io::*;
