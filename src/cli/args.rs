//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap,
//! with validation of the requested target.

use crate::bundler::TargetKind;
use crate::manifest::DEFAULT_SETTINGS_FILE;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Values accepted by `--target`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelection {
    /// Server, client, then the web host copy
    All,
    /// Server bundle and the web host copy
    Server,
    /// Client bundle only
    Client,
    /// Compiler bundle only
    Compiler,
}

impl TargetSelection {
    /// The single target this selects, `None` for the full run.
    pub fn kind(self) -> Option<TargetKind> {
        match self {
            TargetSelection::All => None,
            TargetSelection::Server => Some(TargetKind::Server),
            TargetSelection::Client => Some(TargetKind::Client),
            TargetSelection::Compiler => Some(TargetKind::Compiler),
        }
    }
}

/// Standalone executable bundler for the GatorShare server and client
#[derive(Parser, Debug)]
#[command(
    name = "gatorshare_bundler",
    version,
    about = "Bundles the GatorShare server and client into standalone executables",
    long_about = "Bundles the GatorShare server and client into standalone executables with mkbundle.

For each target the dependency directory is scanned for .dll files, which are passed to
mkbundle together with the runtime configuration. After a full run the web host
executable is copied into the server bin location.

Usage:
  gatorshare_bundler --config installer/bundle.toml
  gatorshare_bundler --target client --dry-run
  gatorshare_bundler --with-compiler

Exit code 0 = every requested bundle was created."
)]
pub struct Args {
    /// Settings file describing all input and output paths
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        env = "GATORSHARE_BUNDLE_CONFIG",
        default_value = DEFAULT_SETTINGS_FILE
    )]
    pub config: PathBuf,

    /// Target to bundle
    #[arg(short, long, value_enum, default_value_t = TargetSelection::All)]
    pub target: TargetSelection,

    /// Also bundle the compiler when running all targets
    #[arg(long)]
    pub with_compiler: bool,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Show discovered dependencies and bundler output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.with_compiler && self.target != TargetSelection::All {
            return Err("--with-compiler only applies to --target all".to_string());
        }

        Ok(())
    }

    /// Targets selected by `--target`, `None` meaning the full run.
    pub fn selected_target(&self) -> Option<TargetKind> {
        self.target.kind()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
