//! SGR encoding vocabulary.
//!
//! Contains the fixed lookup data for building control sequences:
//! - GraphicsMode: text attributes with their set codes
//! - StandardColor: the eight standard colors plus the DEFAULT pseudo-color
//! - Region: foreground or background addressing

use serde::Serialize;
use std::fmt;

/// Text attribute toggled by an SGR sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicsMode {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
    Strike,
}

impl GraphicsMode {
    /// All modes in code order.
    pub const ALL: [GraphicsMode; 8] = [
        GraphicsMode::Bold,
        GraphicsMode::Dim,
        GraphicsMode::Italic,
        GraphicsMode::Underline,
        GraphicsMode::Blink,
        GraphicsMode::Reverse,
        GraphicsMode::Hidden,
        GraphicsMode::Strike,
    ];

    /// SGR code that turns the mode on.
    pub fn set_code(self) -> u8 {
        match self {
            GraphicsMode::Bold => 1,
            GraphicsMode::Dim => 2,
            GraphicsMode::Italic => 3,
            GraphicsMode::Underline => 4,
            GraphicsMode::Blink => 5,
            GraphicsMode::Reverse => 7,
            GraphicsMode::Hidden => 8,
            GraphicsMode::Strike => 9,
        }
    }

    /// SGR code that turns the mode off.
    ///
    /// Generally `set_code + 20`. Bold is the exception: 21 is double
    /// underline on most terminals, so bold is reset by 22.
    pub fn reset_code(self) -> u8 {
        match self {
            GraphicsMode::Bold => 22,
            mode => mode.set_code() + 20,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GraphicsMode::Bold => "bold",
            GraphicsMode::Dim => "dim",
            GraphicsMode::Italic => "italic",
            GraphicsMode::Underline => "underline",
            GraphicsMode::Blink => "blink",
            GraphicsMode::Reverse => "reverse",
            GraphicsMode::Hidden => "hidden",
            GraphicsMode::Strike => "strike",
        }
    }
}

impl fmt::Display for GraphicsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the eight standard ANSI colors, or the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Restore the terminal's default color.
    Default,
}

impl StandardColor {
    /// The eight addressable colors, excluding `Default`.
    pub const ALL: [StandardColor; 8] = [
        StandardColor::Black,
        StandardColor::Red,
        StandardColor::Green,
        StandardColor::Yellow,
        StandardColor::Blue,
        StandardColor::Magenta,
        StandardColor::Cyan,
        StandardColor::White,
    ];

    /// Numeric value added to the region offset (0-7, or 9 for `Default`).
    pub fn value(self) -> u8 {
        match self {
            StandardColor::Black => 0,
            StandardColor::Red => 1,
            StandardColor::Green => 2,
            StandardColor::Yellow => 3,
            StandardColor::Blue => 4,
            StandardColor::Magenta => 5,
            StandardColor::Cyan => 6,
            StandardColor::White => 7,
            StandardColor::Default => 9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StandardColor::Black => "black",
            StandardColor::Red => "red",
            StandardColor::Green => "green",
            StandardColor::Yellow => "yellow",
            StandardColor::Blue => "blue",
            StandardColor::Magenta => "magenta",
            StandardColor::Cyan => "cyan",
            StandardColor::White => "white",
            StandardColor::Default => "default",
        }
    }
}

impl fmt::Display for StandardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which part of the cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Foreground,
    Background,
}

impl Region {
    /// Base code for 16-color selection.
    pub fn offset(self, bright: bool) -> u8 {
        match (bright, self) {
            (false, Region::Foreground) => 30,
            (false, Region::Background) => 40,
            (true, Region::Foreground) => 90,
            (true, Region::Background) => 100,
        }
    }

    /// Leading code for extended (256-color and RGB) selection.
    pub fn extended_prefix(self) -> u8 {
        match self {
            Region::Foreground => 38,
            Region::Background => 48,
        }
    }

    /// Code that restores the default color of this region.
    pub fn default_code(self) -> u8 {
        match self {
            Region::Foreground => 39,
            Region::Background => 49,
        }
    }
}
