//! Configuration management for Databot.
//!
//! Handles loading configuration from a TOML file, with defaults for every
//! field so a missing config file is never an error.

use crate::error::{DatabotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Databot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Chart artifact output settings.
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

/// Chart artifact output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory chart files are written into.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Prefix prepended to artifact filenames to form the reference URL
    /// returned to the caller (the serving layer maps it back to `dir`).
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_url_prefix() -> String {
    "/artifacts".to_string()
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            url_prefix: default_url_prefix(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("databot")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| DatabotError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            DatabotError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
