//! Codec configuration via `codecs.toml`
//!
//! The defaults match what stored data expects, so most deployments never
//! write this file. To change settings, edit it and rebuild the registry
//! with [`crate::CodecRegistry::standard`].

use cube_trainer_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name used by applications that keep one next to their data.
pub const CONFIG_FILE_NAME: &str = "codecs.toml";

/// Codec configuration loaded from `codecs.toml`.
///
/// # Example
///
/// ```toml
/// accept_legacy_case_marker = true
/// blank_is_absent = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Strip a leading `PartCycle` marker when decoding cases.
    #[serde(default = "default_true")]
    pub accept_legacy_case_marker: bool,
    /// Read an empty column string as an absent value.
    #[serde(default = "default_true")]
    pub blank_is_absent: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            accept_legacy_case_marker: true,
            blank_is_absent: true,
        }
    }
}

impl CodecConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Cube trainer codec configuration
#
# Older rows store cases with a leading "PartCycle:" marker.
#   true  = strip it on decode (default)
#   false = reject such rows with an unknown legacy marker error
accept_legacy_case_marker = true

# Read an empty column string as an absent value (default: true).
# When false, "" is decoded and rejected as a malformed payload by every
# structured codec.
blank_is_absent = true
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the text is not valid config TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse codec config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
