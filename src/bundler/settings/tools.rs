//! External tool configuration.

use std::path::PathBuf;

/// Default bundler program.
pub const DEFAULT_BUNDLER: &str = "mkbundle2";

/// Suffix identifying shared-library dependencies.
pub const DEFAULT_DEPENDENCY_SUFFIX: &str = ".dll";

/// Framework assembly the server needs but which never lives in its lib directory.
pub const SERVER_SEED_DEPENDENCY: &str = "System.Xml.Linq.dll";

/// Environment variable pinning the runtime version the bundler embeds.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct RuntimeEnv {
    /// Variable name, e.g. `MONO_OPTIONS`.
    pub name: String,
    /// Variable value, e.g. `--runtime=v2.0.50215`.
    pub value: String,
}

impl Default for RuntimeEnv {
    fn default() -> Self {
        Self {
            name: "MONO_OPTIONS".to_string(),
            value: "--runtime=v2.0.50215".to_string(),
        }
    }
}

/// How the bundler is invoked and how dependencies are recognised.
///
/// All fields are optional in a settings file:
///
/// ```toml
/// [tools]
/// bundler = "mkbundle2"
/// runtime_env = { name = "MONO_OPTIONS", value = "--runtime=v2.0.50215" }
/// dependency_suffix = ".dll"
/// server_seed_dependencies = ["System.Xml.Linq.dll"]
/// compiler_exe = "/usr/lib/mono/2.0/gmcs.exe"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolSettings {
    /// Bundler program name or path.
    pub bundler: String,

    /// Environment applied to every bundler process.
    pub runtime_env: Option<RuntimeEnv>,

    /// Case-sensitive filename suffix of dependency files.
    pub dependency_suffix: String,

    /// Dependencies listed ahead of the scanned ones for the server bundle.
    pub server_seed_dependencies: Vec<String>,

    /// Compiler executable; enables the `compiler` target when set.
    pub compiler_exe: Option<PathBuf>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            bundler: DEFAULT_BUNDLER.to_string(),
            runtime_env: Some(RuntimeEnv::default()),
            dependency_suffix: DEFAULT_DEPENDENCY_SUFFIX.to_string(),
            server_seed_dependencies: vec![SERVER_SEED_DEPENDENCY.to_string()],
            compiler_exe: None,
        }
    }
}
