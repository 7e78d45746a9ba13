//! Template formatting errors.

use crate::spec::SpecError;

/// Errors that can occur while rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("single '{brace}' encountered in format string at byte {position}")]
    UnmatchedBrace { brace: char, position: usize },

    #[error("expected '}}' before end of string")]
    UnclosedField,

    #[error("cannot switch between automatic field numbering and manual field specification")]
    MixedNumbering,

    #[error("replacement index {0} out of range for positional args")]
    IndexOutOfRange(usize),

    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("unsupported field name '{0}' (attribute and index access are not supported)")]
    UnsupportedFieldName(String),

    #[error("unknown conversion specifier '{0}'")]
    UnknownConversion(String),

    #[error("invalid format specifier '{spec}': {reason}")]
    InvalidFormatSpec { spec: String, reason: String },

    #[error("max string recursion exceeded")]
    RecursionLimit,

    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl FormatError {
    pub(crate) fn invalid_spec(spec: &str, reason: impl Into<String>) -> Self {
        FormatError::InvalidFormatSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}
