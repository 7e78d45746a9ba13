//! Color specification errors.

/// Errors that can occur while parsing a color specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("invalid color specification: '{spec}'")]
    InvalidColorSpec { spec: String },
}

impl SpecError {
    pub(crate) fn invalid(spec: &str) -> Self {
        SpecError::InvalidColorSpec {
            spec: spec.to_string(),
        }
    }

    /// The rejected input.
    pub fn spec(&self) -> &str {
        match self {
            SpecError::InvalidColorSpec { spec } => spec,
        }
    }
}
