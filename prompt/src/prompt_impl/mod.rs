// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod fallback;
pub mod line_buffer;
pub mod prompt_error;
pub mod session;
pub mod terminal;

// Re-export.
pub use fallback::*;
pub use line_buffer::*;
pub use prompt_error::*;
pub use session::*;
pub use terminal::*;
