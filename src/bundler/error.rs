//! Error types for bundling operations.
//!
//! Provides the [`Error`] enum plus the [`ErrorExt`] and [`Context`] helper
//! traits used throughout the bundler to attach paths and messages to failures.

use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while discovering dependencies, building or running commands.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Free-form error message.
    #[error("{0}")]
    GenericError(String),

    /// Raw IO error without path context.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// IO error annotated with the operation and path involved.
    #[error("{context} ({path}): {source}")]
    Fs {
        /// What was being attempted.
        context: String,
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failure.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// The process could not be spawned at all.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program name.
        command: String,
        /// Spawn error.
        error: std::io::Error,
    },

    /// The process ran and exited unsuccessfully.
    #[error("`{command}` failed with {status}{}", stderr_suffix(.stderr))]
    ToolFailed {
        /// Rendered command line.
        command: String,
        /// Exit status reported by the OS.
        status: std::process::ExitStatus,
        /// Captured standard error.
        stderr: String,
    },

    /// Required external tool is not on PATH.
    #[error("{tool} not found in PATH")]
    ToolNotFound {
        /// Program that was looked up.
        tool: String,
    },

    /// A command or settings builder was finalised without a required field.
    #[error("{0} is required")]
    MissingField(&'static str),
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Attaches filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wraps the error with a description of the operation and the path.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts `Option`s and foreign errors into [`Error::GenericError`].
pub trait Context<T> {
    /// Replaces the failure case with the given message.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Returns early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
