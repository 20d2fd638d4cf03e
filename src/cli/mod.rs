//! Command line interface for the GatorShare bundler.
//!
//! This module provides argument parsing, command execution, and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig, TargetSelection};
pub use output::OutputManager;

use crate::error::{BundlerError, CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with(&args).await
}

/// Validate and execute already parsed arguments
pub async fn run_with(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| BundlerError::Cli(CliError::InvalidArguments { reason }))?;

    let runtime_config = RuntimeConfig::from(args);
    let result = commands::bundle::execute(args, &runtime_config).await;

    if let Err(e) = &result {
        for suggestion in e.recovery_suggestions() {
            runtime_config.output().info(&format!("hint: {}", suggestion))?;
        }
    }

    result
}
