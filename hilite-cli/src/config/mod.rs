//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use hilite_core::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default selector for the search context
pub const DEFAULT_SELECTOR: &str = "body";

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Marker and matching options
    #[serde(default)]
    pub highlight: Options,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSS selector of the search context roots
    pub selector: String,

    /// Emit only the contents of `body` instead of the whole document
    pub fragment: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            fragment: false,
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config
            .highlight
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        log::debug!("Loaded configuration from {}", path.display());

        Self::from_toml(&text)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
