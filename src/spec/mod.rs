//! Color specification parser.
//!
//! A specification is a short string such as `r.g+i-u`:
//!
//! ```text
//! [foreground] ["." background] ["+" add-modes] ["-" remove-modes]
//! ```
//!
//! Color groups name exactly one color; mode groups are read one
//! character at a time. The result is a `ControlSequence::Concatenation`
//! holding foreground, background, added modes and removed modes, in
//! that order.

mod error;

pub use error::SpecError;

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::ansi::{ControlSequence, GraphicsMode, StandardColor};

/// Single-character color identifiers.
pub const COLOR_IDENTS: [(char, StandardColor); 8] = [
    ('k', StandardColor::Black),
    ('r', StandardColor::Red),
    ('g', StandardColor::Green),
    ('y', StandardColor::Yellow),
    ('b', StandardColor::Blue),
    ('m', StandardColor::Magenta),
    ('c', StandardColor::Cyan),
    ('w', StandardColor::White),
];

/// Single-character mode identifiers.
pub const MODE_IDENTS: [(char, GraphicsMode); 8] = [
    ('b', GraphicsMode::Bold),
    ('f', GraphicsMode::Dim),
    ('i', GraphicsMode::Italic),
    ('u', GraphicsMode::Underline),
    ('k', GraphicsMode::Blink),
    ('r', GraphicsMode::Reverse),
    ('h', GraphicsMode::Hidden),
    ('s', GraphicsMode::Strike),
];

/// Compiled once, shared read-only by every caller.
static SPECIFICATION_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    let colors: String = COLOR_IDENTS.iter().map(|(c, _)| *c).collect();
    let modes: String = MODE_IDENTS.iter().map(|(c, _)| *c).collect();
    let pattern = format!(
        r"^(?P<foreground>[{colors}]+)?(?:\.(?P<background>[{colors}]+))?(?:\+(?P<add_mode>[{modes}]+))?(?:-(?P<sub_mode>[{modes}]+))?$"
    );
    Regex::new(&pattern).expect("Invalid color specification grammar")
});

/// The four optional groups of a matched specification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSpec<'a> {
    pub foreground: Option<&'a str>,
    pub background: Option<&'a str>,
    pub add_modes: Option<&'a str>,
    pub remove_modes: Option<&'a str>,
}

impl<'a> ParsedSpec<'a> {
    /// Match `spec` against the grammar. The whole input must match.
    pub fn parse(spec: &'a str) -> Result<Self, SpecError> {
        let caps = SPECIFICATION_GRAMMAR
            .captures(spec)
            .ok_or_else(|| SpecError::invalid(spec))?;
        let group = |caps: &Captures<'a>, name: &str| caps.name(name).map(|m| m.as_str());
        Ok(Self {
            foreground: group(&caps, "foreground"),
            background: group(&caps, "background"),
            add_modes: group(&caps, "add_mode"),
            remove_modes: group(&caps, "sub_mode"),
        })
    }

    /// Resolve identifiers and assemble the concatenated sequence.
    ///
    /// `spec` is the original input, reported on failure.
    pub fn to_sequence(&self, spec: &str) -> Result<ControlSequence, SpecError> {
        let mut parts = Vec::new();

        if let Some(ident) = self.foreground {
            let color = lookup_color(ident).ok_or_else(|| SpecError::invalid(spec))?;
            parts.push(ControlSequence::fg(color));
        }
        if let Some(ident) = self.background {
            let color = lookup_color(ident).ok_or_else(|| SpecError::invalid(spec))?;
            parts.push(ControlSequence::bg(color));
        }
        for (run, set) in [(self.add_modes, true), (self.remove_modes, false)] {
            for ch in run.unwrap_or_default().chars() {
                let mode = mode_for(ch).ok_or_else(|| SpecError::invalid(spec))?;
                parts.push(ControlSequence::Mode { mode, set });
            }
        }

        Ok(ControlSequence::concat(parts))
    }
}

/// Whole-run color lookup; runs longer than one character never resolve.
fn lookup_color(ident: &str) -> Option<StandardColor> {
    let mut chars = ident.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => color_for(ch),
        _ => None,
    }
}

/// Color named by a single identifier character.
pub fn color_for(ch: char) -> Option<StandardColor> {
    COLOR_IDENTS
        .iter()
        .find(|(ident, _)| *ident == ch)
        .map(|(_, color)| *color)
}

/// Mode named by a single identifier character.
pub fn mode_for(ch: char) -> Option<GraphicsMode> {
    MODE_IDENTS
        .iter()
        .find(|(ident, _)| *ident == ch)
        .map(|(_, mode)| *mode)
}

/// Parse a color specification into a control sequence.
///
/// # Errors
///
/// Returns [`SpecError::InvalidColorSpec`] if the grammar does not match
/// the whole input or an identifier does not resolve.
pub fn parse_control(spec: &str) -> Result<ControlSequence, SpecError> {
    let result = ParsedSpec::parse(spec).and_then(|parsed| parsed.to_sequence(spec));
    match &result {
        Ok(ControlSequence::Concatenation { parts }) => {
            trace!(spec = %spec, parts = parts.len(), "Parsed color spec");
        }
        Ok(_) => {}
        Err(err) => debug!(spec = %spec, error = %err, "Rejected color spec"),
    }
    result
}
