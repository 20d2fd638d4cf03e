//! Filesystem locations consumed by the bundler.

use std::path::PathBuf;

/// Input and output paths for the server and client bundles.
///
/// Every field is required. Relative paths in a settings file are resolved
/// against that file's directory when loaded.
///
/// # Configuration
///
/// ```toml
/// [paths]
/// server_lib = "build/server/bin"
/// server_bundle = "dist/gsserver"
/// server_bin = "dist/bin/xsp2.exe"
/// xsp_exe = "/usr/lib/mono/2.0/xsp2.exe"
/// client_bin = "build/client/bin"
/// client_bundle = "dist/gsclient"
/// client_exe = "build/client/bin/GSClient.exe"
/// installer_etc = "installer/etc"
/// machine_config = "installer/etc/mono/2.0/machine.config"
/// sys_config = "installer/etc/mono/config"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathSettings {
    /// Server library directory, scanned for dependencies.
    pub server_lib: PathBuf,

    /// Output path of the bundled server executable.
    pub server_bundle: PathBuf,

    /// Destination the web host executable is copied to after bundling.
    pub server_bin: PathBuf,

    /// Web host executable embedded into the server bundle.
    pub xsp_exe: PathBuf,

    /// Client bin directory, scanned for dependencies.
    pub client_bin: PathBuf,

    /// Output path of the bundled client executable.
    pub client_bundle: PathBuf,

    /// Client executable embedded into the client bundle.
    pub client_exe: PathBuf,

    /// Runtime configuration directory passed as `--config-dir`.
    pub installer_etc: PathBuf,

    /// Machine configuration file passed as `--machine-config`.
    pub machine_config: PathBuf,

    /// Runtime system configuration passed as `--config`.
    pub sys_config: PathBuf,
}
