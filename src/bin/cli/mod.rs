//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: subcommand execution
//! - config_layer: configuration layering and merging
//! - output: report rendering

pub mod args;
pub mod commands;
pub mod config_layer;
pub mod output;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
