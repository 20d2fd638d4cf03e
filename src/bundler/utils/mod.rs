//! Shared helpers for bundling operations.

pub mod fs;
