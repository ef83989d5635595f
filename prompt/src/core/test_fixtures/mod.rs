// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod mock_terminal_device;
mod stdout_mock;

// Re-export.
pub use mock_terminal_device::*;
pub use stdout_mock::*;
