//! Core Settings struct and implementations.

use super::{PathSettings, ToolSettings};
use crate::bundler::{Error, Result, TargetKind};
use std::path::{Path, PathBuf};

/// File name of the compiler bundle, written inside the server library directory.
const COMPILER_BUNDLE_NAME: &str = "gmcs";

/// Main settings for bundler operations.
///
/// Read-only for the whole run. Constructed via [`SettingsBuilder`] or loaded
/// from a settings file by [`crate::manifest::load_settings`].
///
/// # Examples
///
/// ```no_run
/// use gatorshare_bundler::bundler::{SettingsBuilder, TargetKind};
///
/// # fn example() -> gatorshare_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .server_lib("/srv/gs/lib")
///     .server_bundle("/srv/gs/dist/gsserver")
///     .server_bin("/srv/gs/dist/bin/xsp2.exe")
///     .xsp_exe("/usr/lib/mono/2.0/xsp2.exe")
///     .client_bin("/srv/gs/client/bin")
///     .client_bundle("/srv/gs/dist/gsclient")
///     .client_exe("/srv/gs/client/bin/GSClient.exe")
///     .installer_etc("/srv/gs/installer/etc")
///     .machine_config("/srv/gs/installer/etc/mono/2.0/machine.config")
///     .sys_config("/srv/gs/installer/etc/mono/config")
///     .build()?;
///
/// assert_eq!(settings.dependency_root(TargetKind::Server), Some(std::path::Path::new("/srv/gs/lib")));
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
/// - [`PathSettings`] - Input and output locations
/// - [`ToolSettings`] - Bundler invocation details
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    paths: PathSettings,
    tools: ToolSettings,
}

impl Settings {
    /// Creates settings from already validated parts.
    pub fn new(paths: PathSettings, tools: ToolSettings) -> Self {
        Self { paths, tools }
    }

    /// Returns the configured paths.
    pub fn paths(&self) -> &PathSettings {
        &self.paths
    }

    /// Returns the tool configuration.
    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    /// Directory scanned for dependencies of `target`.
    ///
    /// The compiler bundle has no scanned dependencies.
    pub fn dependency_root(&self, target: TargetKind) -> Option<&Path> {
        match target {
            TargetKind::Server => Some(&self.paths.server_lib),
            TargetKind::Client => Some(&self.paths.client_bin),
            TargetKind::Compiler => None,
        }
    }

    /// Dependencies placed ahead of the scanned ones.
    pub fn seed_dependencies(&self, target: TargetKind) -> &[String] {
        match target {
            TargetKind::Server => &self.tools.server_seed_dependencies,
            TargetKind::Client | TargetKind::Compiler => &[],
        }
    }

    /// Where the bundler writes the standalone executable for `target`.
    pub fn output_bundle(&self, target: TargetKind) -> PathBuf {
        match target {
            TargetKind::Server => self.paths.server_bundle.clone(),
            TargetKind::Client => self.paths.client_bundle.clone(),
            TargetKind::Compiler => self.paths.server_lib.join(COMPILER_BUNDLE_NAME),
        }
    }

    /// Managed executable embedded into the bundle for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for the compiler target when no
    /// compiler executable is configured.
    pub fn target_exe(&self, target: TargetKind) -> Result<&Path> {
        match target {
            TargetKind::Server => Ok(&self.paths.xsp_exe),
            TargetKind::Client => Ok(&self.paths.client_exe),
            TargetKind::Compiler => self
                .tools
                .compiler_exe
                .as_deref()
                .ok_or(Error::MissingField("tools.compiler_exe")),
        }
    }
}
