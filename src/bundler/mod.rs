//! Standalone executable bundling for the GatorShare server and client.
//!
//! Wraps the external `mkbundle2` tool, which embeds the managed runtime and
//! an executable's dependent assemblies into a single native binary.

mod builder;
mod command;
mod deps;
pub mod error;
mod runner;
mod settings;
mod target;
mod utils;

use std::path::PathBuf;

pub use builder::{Bundler, calculate_sha256, locate_tool};
pub use command::{MkbundleCommand, MkbundleCommandBuilder};
pub use deps::{collect_target_dependencies, discover_dependencies};
pub use error::{Error, Result};
pub use runner::{ToolOutput, run_command};
pub use settings::{
    DEFAULT_BUNDLER, DEFAULT_DEPENDENCY_SUFFIX, PathSettings, RuntimeEnv, SERVER_SEED_DEPENDENCY,
    Settings, SettingsBuilder, ToolSettings,
};
pub use target::TargetKind;
pub use utils::fs::copy_file;

/// Outcome of bundling one target.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Which deliverable this is.
    pub target: TargetKind,
    /// Bundle output path.
    pub path: PathBuf,
    /// Shell rendering of the command that was (or would be) run.
    pub command: String,
    /// Size in bytes; `None` for dry runs.
    pub size: Option<u64>,
    /// Hex SHA-256 of the bundle; `None` for dry runs.
    pub checksum: Option<String>,
}
