//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_SEPARATOR;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Template formatting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Character separating a field's value spec from its color spec
    #[serde(default = "default_separator")]
    pub separator: char,
}

pub fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

/// Characters that already mean something inside a field, its value spec
/// or a color spec.
const RESERVED_SEPARATORS: &[char] = &[
    '{', '}', ':', '!', '.', '+', '-', '<', '>', '^', '=', '#', ',', '_', '%',
];

impl FormatConfig {
    /// Validate the separator against template and spec syntax.
    pub fn validate(&self) -> Result<(), String> {
        let sep = self.separator;
        if RESERVED_SEPARATORS.contains(&sep) {
            return Err(format!(
                "format.separator '{}' is reserved by the template or color spec syntax",
                sep
            ));
        }
        if sep.is_ascii_alphanumeric() || sep.is_whitespace() {
            return Err(format!(
                "format.separator '{}' must be a punctuation character",
                sep
            ));
        }
        Ok(())
    }
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Record template; `{message}` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// strftime-style timestamp format for `{asctime}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    /// Default level filter when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
}

pub fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            template: None,
            date_format: None,
            level: default_level(),
        }
    }
}
