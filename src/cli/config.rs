//! TOML configuration file support.
//!
//! Settings can be kept in a config file instead of passed as flags:
//!
//! ```toml
//! # msp2mgf.toml
//! [conversion]
//! filename_prefix = "Training"
//! progress_interval = 1000
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for msp2mgf.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionSection,
}

/// Settings for the conversion run.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionSection {
    /// Prefix of the synthesized FILENAME field.
    pub filename_prefix: Option<String>,

    /// Log progress every this many entries.
    pub progress_interval: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
