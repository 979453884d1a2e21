//! Configuration types and management for simhash-rs.
//!
//! The algorithm has a single tuning knob, the fingerprint width B
//! (`num_hash_bits`). Everything else here shapes how results are reported.

pub mod validation;

#[cfg(test)]
mod tests;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, ResultExt, SimHashError};

pub use validation::validate_bounded_usize;

/// Largest fingerprint width accepted from user configuration.
pub const MAX_HASH_BITS: usize = 4096;

/// Main configuration for a fingerprinting session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimHashConfig {
    /// Fingerprint width in bits; both sides of a comparison must share it
    #[serde(default = "SimHashConfig::default_num_hash_bits")]
    pub num_hash_bits: usize,

    /// Report rendering settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default implementation for [`SimHashConfig`].
impl Default for SimHashConfig {
    fn default() -> Self {
        Self {
            num_hash_bits: Self::default_num_hash_bits(),
            output: OutputConfig::default(),
        }
    }
}

/// Configuration construction and I/O methods for [`SimHashConfig`].
impl SimHashConfig {
    /// Width of the underlying MD5 digest.
    const fn default_num_hash_bits() -> usize {
        128
    }

    /// Override the fingerprint width.
    pub fn with_num_hash_bits(mut self, num_hash_bits: usize) -> Self {
        self.num_hash_bits = num_hash_bits;
        self
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        validate_bounded_usize(self.num_hash_bits, 1, MAX_HASH_BITS, "num_hash_bits")?;
        Ok(())
    }
}

/// Output rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Colorize text output
    #[serde(default = "OutputConfig::default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: Self::default_color(),
        }
    }
}

impl OutputConfig {
    const fn default_color() -> bool {
        true
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = SimHashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(SimHashError::config_field(
                format!("unknown output format '{other}'"),
                "output.format",
            )),
        }
    }
}
