//! Top-level error types for the bundler binary.
//!
//! Wraps [`crate::bundler::Error`] together with CLI, settings-file and IO
//! failures, and offers recovery hints for the most common ones.

use thiserror::Error;

/// Result type alias for CLI-level operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments or settings values
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as B;

        match self {
            BundlerError::Bundler(B::ToolNotFound { tool }) => vec![
                format!("Install the package that provides {tool} (mono-devel on most distributions)"),
                "Or point tools.bundler at the bundler executable in bundle.toml".to_string(),
            ],
            BundlerError::Bundler(B::ToolFailed { .. }) => vec![
                "Re-run with RUST_LOG=debug to see the full bundler output".to_string(),
                "Check that every path in [paths] exists and the runtime configs are readable"
                    .to_string(),
            ],
            BundlerError::Bundler(B::Fs { .. } | B::Walk(_)) => {
                vec!["Check that the library directories in [paths] exist".to_string()]
            }
            BundlerError::Toml(_) => vec![
                "All ten [paths] entries are required; see the README for the layout".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
