//! Standalone executable bundler for the GatorShare server and client.
//!
//! This library provides:
//! - Dependency discovery over library directories
//! - Structured `mkbundle` command construction
//! - Sequential orchestration with exit-status checking
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod manifest;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
