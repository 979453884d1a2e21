//! Configuration Layer Management
//!
//! Builds the effective configuration from defaults, a configuration file and
//! CLI overrides, in increasing order of priority.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::cli::args::ConfigOverrides;
use simhash_rs::SimHashConfig;

/// Configuration files picked up from the working directory when `--config` is absent.
pub const IMPLICIT_CONFIG_FILES: [&str; 2] = [".simhash.yml", ".simhash.yaml"];

/// Trait for merging configuration layers
pub trait ConfigMerge<T> {
    /// Merge another configuration into this one, with the other taking priority
    fn merge_with(&mut self, other: T);
}

impl ConfigMerge<&ConfigOverrides> for SimHashConfig {
    fn merge_with(&mut self, other: &ConfigOverrides) {
        if let Some(bits) = other.bits {
            self.num_hash_bits = bits;
        }
        if let Some(format) = other.format {
            self.output.format = format.into();
        }
        if other.no_color {
            self.output.color = false;
        }
    }
}

/// Locate the configuration file to load, if any.
fn resolve_config_path(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| working_dir.join(name))
            .find(|candidate| candidate.exists()),
    }
}

/// Layered configuration loading relative to `working_dir`
pub fn build_layered_config_in(
    overrides: &ConfigOverrides,
    working_dir: &Path,
) -> anyhow::Result<SimHashConfig> {
    let mut config = match resolve_config_path(overrides.config.as_deref(), working_dir) {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            SimHashConfig::from_yaml_file(&path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            })?
        }
        None => SimHashConfig::default(),
    };

    config.merge_with(overrides);
    config.validate().context("Invalid configuration")?;

    debug!(
        num_hash_bits = config.num_hash_bits,
        format = %config.output.format,
        "Effective configuration"
    );
    Ok(config)
}

/// Layered configuration loading relative to the current directory
pub fn build_layered_config(overrides: &ConfigOverrides) -> anyhow::Result<SimHashConfig> {
    let working_dir = std::env::current_dir().context("Failed to determine working directory")?;
    build_layered_config_in(overrides, &working_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::FormatArg;
    use simhash_rs::OutputFormat;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_without_file_or_flags() {
        let dir = tempdir().unwrap();
        let config = build_layered_config_in(&ConfigOverrides::default(), dir.path()).unwrap();
        assert_eq!(config, SimHashConfig::default());
    }

    #[test]
    fn implicit_file_then_flags() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(".simhash.yml"),
            "num_hash_bits: 64\noutput:\n  format: yaml\n",
        )
        .unwrap();

        let config = build_layered_config_in(&ConfigOverrides::default(), dir.path()).unwrap();
        assert_eq!(config.num_hash_bits, 64);
        assert_eq!(config.output.format, OutputFormat::Yaml);

        let overrides = ConfigOverrides {
            bits: Some(32),
            format: Some(FormatArg::Json),
            no_color: true,
            ..ConfigOverrides::default()
        };
        let config = build_layered_config_in(&overrides, dir.path()).unwrap();
        assert_eq!(config.num_hash_bits, 32);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let overrides = ConfigOverrides {
            config: Some(dir.path().join("nope.yml")),
            ..ConfigOverrides::default()
        };

        let err = build_layered_config_in(&overrides, dir.path()).unwrap_err();
        assert!(format!("{err}").contains("Failed to load configuration"));
    }

    #[test]
    fn zero_bits_fails_validation() {
        let dir = tempdir().unwrap();
        let overrides = ConfigOverrides {
            bits: Some(0),
            ..ConfigOverrides::default()
        };

        assert!(build_layered_config_in(&overrides, dir.path()).is_err());
    }
}
