//! colorexpansi Library
//!
//! Compact color specifications (`"r.g+i-u"`) turned into ANSI SGR control
//! sequences, and a string formatter that applies them per field.

pub mod ansi;
pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod spec;

pub use ansi::{ControlSequence, GraphicsMode, Region, StandardColor};
pub use config::Config;
pub use format::{format, ColorFormatter, FieldValue, Fields, FormatError};
pub use logging::{init_logging, AnsiLogFormatter};
pub use spec::{parse_control, SpecError};
