//! simhash CLI - SimHash document fingerprinting
//!
//! Fingerprints text documents and reports the Hamming distance and
//! similarity percentage between them.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging; RUST_LOG wins when set
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compare(args) => {
            let config = cli::config_layer::build_layered_config(&cli.overrides)?;
            cli::compare_command(args, config)?;
        }
        Commands::Fingerprint(args) => {
            let config = cli::config_layer::build_layered_config(&cli.overrides)?;
            cli::fingerprint_command(args, config)?;
        }
        Commands::Distance(args) => {
            let config = cli::config_layer::build_layered_config(&cli.overrides)?;
            cli::distance_command(args, &config)?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args)?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args, &cli.overrides)?;
        }
    }

    Ok(())
}
