//! Configuration structures for bundling operations.
//!
//! [`Settings`] is an explicit value handed to the orchestrator; nothing is
//! read from global state.

mod builder;
mod core;
mod paths;
mod tools;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use paths::PathSettings;
pub use tools::{
    DEFAULT_BUNDLER, DEFAULT_DEPENDENCY_SUFFIX, RuntimeEnv, SERVER_SEED_DEPENDENCY, ToolSettings,
};
