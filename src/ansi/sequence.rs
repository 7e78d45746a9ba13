//! SGR control sequence variants.
//!
//! Every variant knows the decimal argument tokens it contributes; the
//! serializer joins them with `;` between the introducer and `m`.

use serde::Serialize;
use std::fmt;

use super::types::{GraphicsMode, Region, StandardColor};
use super::{CONTROL_SEQUENCE_INTRODUCER, SGR_DELIMITER, SGR_TERMINATOR};

/// An ANSI Select Graphic Rendition escape sequence.
///
/// Values are immutable and compare structurally, so a parsed tree can be
/// checked against a literal expected tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlSequence {
    /// Reset all attributes (`0`).
    Reset,
    /// Set or reset a single text attribute.
    Mode { mode: GraphicsMode, set: bool },
    /// Select one of the 16 standard colors.
    ///
    /// `StandardColor::Default` always uses the normal foreground offset
    /// and emits `39`, whatever the region and brightness.
    Color16 {
        color: StandardColor,
        region: Region,
        bright: bool,
    },
    /// Restore the default color of a region (`39` / `49`).
    ColorDefault { region: Region },
    /// Select a color from the 256-color palette.
    Color256 { index: u8, region: Region },
    /// Select a 24-bit color.
    ColorRgb {
        red: u8,
        green: u8,
        blue: u8,
        region: Region,
    },
    /// Several sequences emitted as one.
    Concatenation { parts: Vec<ControlSequence> },
}

impl ControlSequence {
    /// Normal-intensity foreground color.
    pub fn fg(color: StandardColor) -> Self {
        Self::Color16 {
            color,
            region: Region::Foreground,
            bright: false,
        }
    }

    /// Normal-intensity background color.
    pub fn bg(color: StandardColor) -> Self {
        Self::Color16 {
            color,
            region: Region::Background,
            bright: false,
        }
    }

    pub fn set(mode: GraphicsMode) -> Self {
        Self::Mode { mode, set: true }
    }

    pub fn reset_mode(mode: GraphicsMode) -> Self {
        Self::Mode { mode, set: false }
    }

    pub fn indexed(index: u8, region: Region) -> Self {
        Self::Color256 { index, region }
    }

    /// 24-bit color from channels in conventional red, green, blue order.
    pub fn rgb(red: u8, green: u8, blue: u8, region: Region) -> Self {
        Self::ColorRgb {
            red,
            green,
            blue,
            region,
        }
    }

    pub fn concat(parts: Vec<ControlSequence>) -> Self {
        Self::Concatenation { parts }
    }

    /// Decimal argument tokens in emission order.
    pub fn arguments(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.push_arguments(&mut out);
        out
    }

    fn push_arguments(&self, out: &mut Vec<String>) {
        match self {
            ControlSequence::Reset => out.push("0".to_string()),
            ControlSequence::Mode { mode, set } => {
                let code = if *set {
                    mode.set_code()
                } else {
                    mode.reset_code()
                };
                out.push(code.to_string());
            }
            ControlSequence::Color16 {
                color,
                region,
                bright,
            } => {
                let offset = match color {
                    StandardColor::Default => Region::Foreground.offset(false),
                    _ => region.offset(*bright),
                };
                out.push((offset + color.value()).to_string());
            }
            ControlSequence::ColorDefault { region } => out.push(region.default_code().to_string()),
            ControlSequence::Color256 { index, region } => {
                out.push(region.extended_prefix().to_string());
                out.push("5".to_string());
                out.push(index.to_string());
            }
            ControlSequence::ColorRgb {
                red,
                green,
                blue,
                region,
            } => {
                out.push(region.extended_prefix().to_string());
                out.push("2".to_string());
                out.push(red.to_string());
                out.push(green.to_string());
                out.push(blue.to_string());
            }
            ControlSequence::Concatenation { parts } => {
                for part in parts {
                    part.push_arguments(out);
                }
            }
        }
    }

    /// Serialize to the escape string `ESC [ args m`.
    pub fn as_str(&self) -> String {
        let body = self.arguments().join(SGR_DELIMITER);
        format!("{}{}{}", CONTROL_SEQUENCE_INTRODUCER, body, SGR_TERMINATOR)
    }

    /// ASCII bytes of the escape string.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.as_str().into_bytes()
    }
}

impl fmt::Display for ControlSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl From<ControlSequence> for Vec<u8> {
    fn from(seq: ControlSequence) -> Self {
        seq.as_bytes()
    }
}
