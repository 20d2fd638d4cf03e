//! External tool detection.
//!
//! Resolves the bundler program on PATH before any process is spawned so a
//! missing install fails with a clear message instead of a spawn error.

use crate::bundler::{Error, Result};
use std::path::PathBuf;

/// Locates `program` on PATH (or validates it if given as a path).
pub fn locate_tool(program: &str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Found {} at: {}", program, path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", program, e);
            Err(Error::ToolNotFound {
                tool: program.to_string(),
            })
        }
    }
}
