// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Private modules (hide internal structure).
mod terminal_config;
mod terminal_device;
mod tty_device;

// Re-exports for flat public API.
pub use terminal_config::*;
pub use terminal_device::*;
pub use tty_device::*;
