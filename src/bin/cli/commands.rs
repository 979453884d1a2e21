//! Command Execution
//!
//! One function per subcommand. Each receives the already-layered
//! configuration where it needs one and writes its report to stdout.

use anyhow::{bail, Context};
use owo_colors::OwoColorize;
use tracing::error;

use crate::cli::args::{
    CompareArgs, ConfigOverrides, DistanceArgs, FingerprintArgs, InitConfigArgs,
    ValidateConfigArgs,
};
use crate::cli::config_layer::ConfigMerge;
use crate::cli::output::{format_comparison, format_distance, format_fingerprints};
use simhash_rs::detectors::simhash::compare;
use simhash_rs::{Fingerprint, SimHashConfig, SimHashEngine};

/// Fingerprint two documents and print their distance and similarity
pub fn compare_command(args: CompareArgs, config: SimHashConfig) -> anyhow::Result<()> {
    let engine = SimHashEngine::new(config)?;
    let report = engine
        .compare_documents(&args.first, &args.second)
        .with_context(|| {
            format!(
                "Failed to compare {} and {}",
                args.first.display(),
                args.second.display()
            )
        })?;

    print!("{}", format_comparison(&report, &engine.config().output)?);
    Ok(())
}

/// Print the fingerprint of each document; unreadable files are reported and
/// make the command fail after the rest are printed.
pub fn fingerprint_command(args: FingerprintArgs, config: SimHashConfig) -> anyhow::Result<()> {
    let engine = SimHashEngine::new(config)?;

    let mut documents = Vec::with_capacity(args.files.len());
    let mut failures = 0usize;
    for result in engine.fingerprint_documents(&args.files) {
        match result {
            Ok(document) => documents.push(document),
            Err(err) => {
                error!("{err}");
                failures += 1;
            }
        }
    }

    print!(
        "{}",
        format_fingerprints(&documents, &engine.config().output, args.hex)?
    );

    if failures > 0 {
        bail!("{failures} of {} documents could not be read", args.files.len());
    }
    Ok(())
}

/// Compare two fingerprint strings directly
pub fn distance_command(args: DistanceArgs, config: &SimHashConfig) -> anyhow::Result<()> {
    let first: Fingerprint = args
        .first
        .parse()
        .context("First fingerprint is not a bit string")?;
    let second: Fingerprint = args
        .second
        .parse()
        .context("Second fingerprint is not a bit string")?;

    let comparison = compare(&first, &second)?;
    print!("{}", format_distance(&comparison, &config.output)?);
    Ok(())
}

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("# Default simhash configuration");
    println!("# Save this to a file and customize as needed");
    println!("# Usage: simhash --config your-config.yml compare <FILE1> <FILE2>");
    println!();

    let yaml_output = serde_yaml::to_string(&SimHashConfig::default())?;
    print!("{yaml_output}");
    Ok(())
}

/// Initialize a configuration file with defaults
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "Configuration file already exists: {} (use --force to overwrite)",
            args.output.display()
        );
    }

    SimHashConfig::default().to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    Ok(())
}

/// Validate a configuration file, applying any CLI overrides on top
pub fn validate_config(args: ValidateConfigArgs, overrides: &ConfigOverrides) -> anyhow::Result<()> {
    let mut config = SimHashConfig::from_yaml_file(&args.path)
        .with_context(|| format!("Failed to load configuration from {}", args.path.display()))?;
    config.merge_with(overrides);
    config
        .validate()
        .with_context(|| format!("Configuration {} is invalid", args.path.display()))?;

    println!(
        "{} {}",
        "Configuration file is valid:".bright_green().bold(),
        args.path.display()
    );
    println!("  num_hash_bits: {}", config.num_hash_bits);
    println!("  output.format: {}", config.output.format);
    println!("  output.color:  {}", config.output.color);
    Ok(())
}
