//! Color-aware template formatting.
//!
//! A field's format spec may carry a trailing color specification after a
//! separator (default `$`):
//!
//! ```
//! use colorexpansi::{format, Fields};
//!
//! let out = format("{level:<5$r+b} {msg}", &Fields::new().with("level", "ERROR").with("msg", "boom")).unwrap();
//! assert_eq!(out, "\x1b[31;1mERROR\x1b[0m boom");
//! ```
//!
//! The part before the separator formats the value as usual; the part
//! after it is parsed as a color spec and its escape sequence wraps the
//! formatted value, followed by a reset.

mod error;
pub mod template;
mod value;

pub use error::FormatError;
pub use value::{format_value, FieldValue, Fields};

use crate::ansi::RESET;
use crate::spec::parse_control;
use template::{Conversion, FieldRef, Segment};

/// Default separator between a field's value spec and its color spec.
pub const DEFAULT_SEPARATOR: char = '$';

/// Nesting allowed for replacement fields inside format specs.
const MAX_RECURSION: usize = 2;

/// Template formatter that understands color specs in field format specs.
///
/// Stateless apart from the separator, so one instance can be shared
/// freely between callers and threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFormatter {
    separator: char,
}

impl Default for ColorFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

/// Shared formatter used by [`format`].
pub static DEFAULT_FORMATTER: ColorFormatter = ColorFormatter::new(DEFAULT_SEPARATOR);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Unset,
    Auto(usize),
    Manual,
}

impl ColorFormatter {
    pub const fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Render `template`, substituting values from `fields`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] for malformed templates, missing fields,
    /// invalid value specs, or invalid color specs.
    pub fn format(&self, template: &str, fields: &Fields) -> Result<String, FormatError> {
        let mut numbering = Numbering::Unset;
        self.render(template, fields, &mut numbering, MAX_RECURSION)
    }

    /// Format a single value with a combined `value_spec[$color_spec]`.
    pub fn format_field(&self, value: &FieldValue, format_spec: &str) -> Result<String, FormatError> {
        let (value_spec, color_spec) = format_spec
            .split_once(self.separator)
            .unwrap_or((format_spec, ""));

        let formatted = format_value(value, value_spec)?;
        if color_spec.is_empty() {
            return Ok(formatted);
        }

        let style = parse_control(color_spec)?;
        Ok(format!("{}{}{}", style, formatted, RESET))
    }

    fn render(
        &self,
        template: &str,
        fields: &Fields,
        numbering: &mut Numbering,
        depth: usize,
    ) -> Result<String, FormatError> {
        if depth == 0 {
            return Err(FormatError::RecursionLimit);
        }

        let mut out = String::with_capacity(template.len());
        for segment in template::parse(template)? {
            match segment {
                Segment::Literal(text) => out.push_str(&text),
                Segment::Field(field) => {
                    let value = resolve(&field.name, fields, numbering)?;
                    let value = match field.conversion {
                        Some(Conversion::Display) => FieldValue::Str(value.to_string()),
                        Some(Conversion::Repr) => FieldValue::Str(value.repr()),
                        None => value.clone(),
                    };
                    let spec = if field.spec.contains('{') {
                        self.render(&field.spec, fields, numbering, depth - 1)?
                    } else {
                        field.spec
                    };
                    out.push_str(&self.format_field(&value, &spec)?);
                }
            }
        }
        Ok(out)
    }
}

fn resolve<'a>(
    name: &FieldRef,
    fields: &'a Fields,
    numbering: &mut Numbering,
) -> Result<&'a FieldValue, FormatError> {
    let index = match name {
        FieldRef::Name(name) => {
            return fields
                .named(name)
                .ok_or_else(|| FormatError::MissingField(name.clone()))
        }
        FieldRef::Auto => match *numbering {
            Numbering::Manual => return Err(FormatError::MixedNumbering),
            Numbering::Unset => {
                *numbering = Numbering::Auto(1);
                0
            }
            Numbering::Auto(next) => {
                *numbering = Numbering::Auto(next + 1);
                next
            }
        },
        FieldRef::Index(index) => match *numbering {
            Numbering::Auto(_) => return Err(FormatError::MixedNumbering),
            _ => {
                *numbering = Numbering::Manual;
                *index
            }
        },
    };
    fields
        .positional(index)
        .ok_or(FormatError::IndexOutOfRange(index))
}

/// Render `template` with the shared default formatter (separator `$`).
pub fn format(template: &str, fields: &Fields) -> Result<String, FormatError> {
    DEFAULT_FORMATTER.format(template, fields)
}
