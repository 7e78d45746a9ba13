//! Configuration management for colorexpansi

pub mod docs;
mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::format::ColorFormatter;

impl Config {
    /// Get the config file path (~/.config/colorexpansi/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Formatter using the configured separator
    pub fn formatter(&self) -> ColorFormatter {
        ColorFormatter::new(self.format.separator)
    }
}
