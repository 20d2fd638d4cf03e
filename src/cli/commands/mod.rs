//! CLI command implementations.

pub mod bundle;
