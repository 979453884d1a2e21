//! CLI Argument Structures
//!
//! Command, argument and global flag definitions for the `simhash` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use simhash_rs::OutputFormat;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// SimHash document fingerprinting and similarity scoring
#[derive(Parser)]
#[command(name = "simhash")]
#[command(version = VERSION)]
#[command(about = "Fingerprint documents with SimHash and compare them by Hamming distance")]
#[command(long_about = "
Compute fixed-width SimHash fingerprints for text documents and score how
similar two documents are from the Hamming distance between fingerprints.

Common Usage:

  # Compare two documents with 128-bit fingerprints
  simhash compare text1.txt text2.txt

  # Use 64-bit fingerprints and JSON output
  simhash compare --bits 64 --format json text1.txt text2.txt

  # Print fingerprints for several files
  simhash fingerprint docs/*.txt

  # Compare two fingerprints directly
  simhash distance 11110000 11111111
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fingerprint two documents and report their distance and similarity
    Compare(CompareArgs),

    /// Print the fingerprint of each document
    Fingerprint(FingerprintArgs),

    /// Compare two fingerprint bit strings
    Distance(DistanceArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Settings that override the configuration file
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Configuration file (defaults to ./.simhash.yml when present)
    #[arg(short, long, global = true, env = "SIMHASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fingerprint width in bits
    #[arg(short, long = "bits", global = true)]
    pub bits: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    /// First document
    pub first: PathBuf,

    /// Second document
    pub second: PathBuf,
}

#[derive(Args)]
pub struct FingerprintArgs {
    /// Documents to fingerprint
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Also print the fingerprint in hexadecimal
    #[arg(long)]
    pub hex: bool,
}

#[derive(Args)]
pub struct DistanceArgs {
    /// First fingerprint ('0'/'1' string)
    pub first: String,

    /// Second fingerprint ('0'/'1' string)
    pub second: String,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".simhash.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    pub path: PathBuf,
}

/// Output format values accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable lines
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}
