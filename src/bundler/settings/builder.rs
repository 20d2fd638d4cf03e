//! Builder for constructing Settings.

use super::{PathSettings, Settings, ToolSettings};
use crate::bundler::{Error, Result};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every path setter is required; [`ToolSettings`] falls back to its defaults.
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Default)]
pub struct SettingsBuilder {
    server_lib: Option<PathBuf>,
    server_bundle: Option<PathBuf>,
    server_bin: Option<PathBuf>,
    xsp_exe: Option<PathBuf>,
    client_bin: Option<PathBuf>,
    client_bundle: Option<PathBuf>,
    client_exe: Option<PathBuf>,
    installer_etc: Option<PathBuf>,
    machine_config: Option<PathBuf>,
    sys_config: Option<PathBuf>,
    tools: ToolSettings,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the server library directory.
    pub fn server_lib<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.server_lib = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the server bundle output path.
    pub fn server_bundle<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.server_bundle = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets where the web host executable is copied after bundling.
    pub fn server_bin<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.server_bin = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the web host executable.
    pub fn xsp_exe<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.xsp_exe = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the client bin directory.
    pub fn client_bin<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.client_bin = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the client bundle output path.
    pub fn client_bundle<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.client_bundle = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the client executable.
    pub fn client_exe<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.client_exe = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the runtime configuration directory.
    pub fn installer_etc<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.installer_etc = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the machine configuration file.
    pub fn machine_config<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.machine_config = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the runtime system configuration file.
    pub fn sys_config<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sys_config = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the tool configuration.
    ///
    /// Default: [`ToolSettings::default`]
    pub fn tools(mut self, tools: ToolSettings) -> Self {
        self.tools = tools;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first unset path.
    pub fn build(self) -> Result<Settings> {
        let paths = PathSettings {
            server_lib: self.server_lib.ok_or(Error::MissingField("server_lib"))?,
            server_bundle: self
                .server_bundle
                .ok_or(Error::MissingField("server_bundle"))?,
            server_bin: self.server_bin.ok_or(Error::MissingField("server_bin"))?,
            xsp_exe: self.xsp_exe.ok_or(Error::MissingField("xsp_exe"))?,
            client_bin: self.client_bin.ok_or(Error::MissingField("client_bin"))?,
            client_bundle: self
                .client_bundle
                .ok_or(Error::MissingField("client_bundle"))?,
            client_exe: self.client_exe.ok_or(Error::MissingField("client_exe"))?,
            installer_etc: self
                .installer_etc
                .ok_or(Error::MissingField("installer_etc"))?,
            machine_config: self
                .machine_config
                .ok_or(Error::MissingField("machine_config"))?,
            sys_config: self.sys_config.ok_or(Error::MissingField("sys_config"))?,
        };

        Ok(Settings::new(paths, self.tools))
    }
}
