//! ANSI SGR escape sequences.
//!
//! References:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
//! - <https://gist.github.com/fnky/458719343aabd01cfb17a3a4f7296797>

mod sequence;
mod types;

pub use sequence::ControlSequence;
pub use types::{GraphicsMode, Region, StandardColor};

/// Bytes that open a control sequence (ESC followed by `[`).
pub const CONTROL_SEQUENCE_INTRODUCER: &str = "\x1b[";

/// Separator between SGR arguments.
pub const SGR_DELIMITER: &str = ";";

/// Final byte of an SGR sequence.
pub const SGR_TERMINATOR: &str = "m";

/// Serialized `ControlSequence::Reset`.
pub const RESET: &str = "\x1b[0m";
