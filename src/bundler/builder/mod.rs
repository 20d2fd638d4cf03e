//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator.
//!
//! # Overview
//!
//! For each target the bundler:
//! 1. Scans the target's library directory for dependencies
//! 2. Assembles the bundler command from [`Settings`](crate::bundler::Settings)
//! 3. Runs it and checks the exit status
//! 4. Records size and checksum of the bundle as a [`BundledArtifact`](crate::bundler::BundledArtifact)
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Bundler`] struct and bundling operations
//! - [`tool_detection`] - External tool availability checking

mod checksum;
mod orchestrator;
mod tool_detection;

pub use checksum::calculate_sha256;
pub use orchestrator::Bundler;
pub use tool_detection::locate_tool;
