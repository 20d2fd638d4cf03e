//! Settings file loading.
//!
//! Reads a `bundle.toml` describing every path the bundler needs and turns it
//! into [`Settings`]. Relative paths are resolved against the directory that
//! contains the file, so the same file works from any working directory.

use crate::bundler::{PathSettings, Settings, ToolSettings};
use crate::error::{BundlerError, CliError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Default settings file name, looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "bundle.toml";

/// On-disk layout of the settings file.
#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    paths: PathSettings,
    #[serde(default)]
    tools: ToolSettings,
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_settings".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let base_dir = path
        .absolutize()?
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    parse_settings(&content, &base_dir)
}

/// Parse settings from TOML text, resolving relative paths against `base_dir`.
pub fn parse_settings(content: &str, base_dir: &Path) -> Result<Settings> {
    let file: SettingsFile = toml::from_str(content)?;
    let SettingsFile { paths, mut tools } = file;

    let paths = PathSettings {
        server_lib: resolve(&paths.server_lib, base_dir)?,
        server_bundle: resolve(&paths.server_bundle, base_dir)?,
        server_bin: resolve(&paths.server_bin, base_dir)?,
        xsp_exe: resolve(&paths.xsp_exe, base_dir)?,
        client_bin: resolve(&paths.client_bin, base_dir)?,
        client_bundle: resolve(&paths.client_bundle, base_dir)?,
        client_exe: resolve(&paths.client_exe, base_dir)?,
        installer_etc: resolve(&paths.installer_etc, base_dir)?,
        machine_config: resolve(&paths.machine_config, base_dir)?,
        sys_config: resolve(&paths.sys_config, base_dir)?,
    };

    if let Some(compiler) = tools.compiler_exe.take() {
        tools.compiler_exe = Some(resolve(&compiler, base_dir)?);
    }

    if tools.bundler.trim().is_empty() {
        return Err(BundlerError::Cli(CliError::InvalidArguments {
            reason: "tools.bundler cannot be empty".to_string(),
        }));
    }

    // An empty suffix would match every file under the library directory
    if tools.dependency_suffix.trim().is_empty() {
        return Err(BundlerError::Cli(CliError::InvalidArguments {
            reason: "tools.dependency_suffix cannot be empty".to_string(),
        }));
    }

    Ok(Settings::new(paths, tools))
}

fn resolve(path: &Path, base_dir: &Path) -> Result<PathBuf> {
    Ok(path.absolutize_from(base_dir)?.into_owned())
}
