// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Key codes and escape sequence bytes understood by the [input decoder].
//!
//! In raw mode the terminal hands over exactly what the keyboard produced. Letters
//! arrive as themselves, `Ctrl+<letter>` arrives as the C0 control code
//! `letter - 'a' + 1`, and the navigation keys arrive as short escape sequences:
//!
//! ```text
//! Key          Bytes            Form
//! ─────────────────────────────────────────
//! Home         ESC O H          SS3
//! End          ESC O F          SS3
//! Up / Down    ESC [ A / B      CSI
//! Right        ESC [ C          CSI
//! Left         ESC [ D          CSI
//! Insert       ESC [ 2 ~        CSI
//! Delete       ESC [ 3 ~        CSI
//! Page Up      ESC [ 5 ~        CSI
//! Page Down    ESC [ 6 ~        CSI
//! ```
//!
//! [input decoder]: mod@crate::core::ansi::input_decoder

// Plain keys.

/// Horizontal tab (`Ctrl+I`).
pub const KEY_TAB: char = '\t';

/// What the Backspace key sends in raw mode (DEL).
pub const KEY_BACKSPACE: char = '\u{7f}';

/// What the Enter key sends in raw mode (`Ctrl+M`).
pub const KEY_RETURN: char = '\r';

/// Start of every escape sequence.
pub const KEY_ESC: char = '\u{1b}';

// Ctrl+letter codes.

pub const CTRL_A: char = '\u{01}';
pub const CTRL_B: char = '\u{02}';
pub const CTRL_C: char = '\u{03}';
pub const CTRL_D: char = '\u{04}';
pub const CTRL_E: char = '\u{05}';
pub const CTRL_F: char = '\u{06}';
pub const CTRL_G: char = '\u{07}';
pub const CTRL_H: char = '\u{08}';
// Ctrl+I is KEY_TAB.
pub const CTRL_J: char = '\u{0a}';
pub const CTRL_K: char = '\u{0b}';
pub const CTRL_L: char = '\u{0c}';
// Ctrl+M is KEY_RETURN.
pub const CTRL_N: char = '\u{0e}';
pub const CTRL_O: char = '\u{0f}';
pub const CTRL_P: char = '\u{10}';
pub const CTRL_Q: char = '\u{11}';
pub const CTRL_R: char = '\u{12}';
pub const CTRL_S: char = '\u{13}';
pub const CTRL_T: char = '\u{14}';
pub const CTRL_U: char = '\u{15}';
pub const CTRL_V: char = '\u{16}';
pub const CTRL_W: char = '\u{17}';
pub const CTRL_X: char = '\u{18}';
pub const CTRL_Y: char = '\u{19}';
pub const CTRL_Z: char = '\u{1a}';

/// Control codes that have no line editing meaning. They decode to
/// [`InputEvent::Skip`].
///
/// `Ctrl+C`, `Ctrl+D`, `Ctrl+L` and `Ctrl+M` (Enter) are absent because they end,
/// interrupt or redraw the line.
///
/// [`InputEvent::Skip`]: crate::InputEvent::Skip
pub const IGNORED_CONTROL_CODES: [char; 22] = [
    KEY_TAB, CTRL_A, CTRL_B, CTRL_E, CTRL_F, CTRL_G, CTRL_H, CTRL_J, CTRL_K, CTRL_N,
    CTRL_O, CTRL_P, CTRL_Q, CTRL_R, CTRL_S, CTRL_T, CTRL_U, CTRL_V, CTRL_W, CTRL_X,
    CTRL_Y, CTRL_Z,
];

// Escape sequence bytes (after ESC).

/// SS3 introducer: ESC O
pub const ANSI_SS3_O: u8 = b'O';

/// CSI introducer: ESC [
pub const ANSI_CSI_BRACKET: u8 = b'[';

/// SS3 final byte for Home.
pub const SS3_HOME: u8 = b'H';

/// SS3 final byte for End.
pub const SS3_END: u8 = b'F';

/// CSI final byte for cursor up.
pub const CSI_UP: u8 = b'A';

/// CSI final byte for cursor down.
pub const CSI_DOWN: u8 = b'B';

/// CSI final byte for cursor right.
pub const CSI_RIGHT: u8 = b'C';

/// CSI final byte for cursor left.
pub const CSI_LEFT: u8 = b'D';

/// Terminator of the `ESC [ <n> ~` editing-key sequences.
pub const CSI_TILDE: u8 = b'~';

/// `ESC [ 3 ~`
pub const CSI_PARAM_DELETE: u8 = b'3';

// Output.

/// Line terminator in raw mode (output post-processing is off, so `\n` alone does not
/// return the carriage).
pub const CRLF: &str = "\r\n";
