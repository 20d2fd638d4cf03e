//! Bundler command construction.
//!
//! Commands are kept as a program plus discrete arguments and handed straight
//! to the process spawner, so paths containing spaces or shell metacharacters
//! pass through untouched. The [`Display`](std::fmt::Display) form renders an
//! equivalent shell line for logs and dry runs only.

use crate::bundler::{Error, Result, RuntimeEnv, Settings, TargetKind};
use std::borrow::Cow;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// A fully resolved bundler invocation.
///
/// Produces, in order:
///
/// ```text
/// <ENV> mkbundle2 -o <output> --deps --config-dir <config_dir>
///     --machine-config <machine_config> --config <config> --static -z <exe> <deps...>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MkbundleCommand {
    program: String,
    env: Option<RuntimeEnv>,
    output: PathBuf,
    config_dir: PathBuf,
    machine_config: PathBuf,
    config: PathBuf,
    exe: PathBuf,
    dependencies: Vec<PathBuf>,
}

impl MkbundleCommand {
    /// Starts a builder for `program`.
    pub fn builder(program: impl Into<String>) -> MkbundleCommandBuilder {
        MkbundleCommandBuilder::new(program)
    }

    /// Assembles the command for `target` from settings and a dependency list.
    ///
    /// Pure: identical inputs always produce an identical command.
    pub fn for_target(
        settings: &Settings,
        target: TargetKind,
        dependencies: Vec<PathBuf>,
    ) -> Result<Self> {
        let tools = settings.tools();
        let paths = settings.paths();

        let mut builder = Self::builder(tools.bundler.clone())
            .output(settings.output_bundle(target))
            .config_dir(&paths.installer_etc)
            .machine_config(&paths.machine_config)
            .config(&paths.sys_config)
            .exe(settings.target_exe(target)?)
            .dependencies(dependencies);
        if let Some(env) = &tools.runtime_env {
            builder = builder.env(env.clone());
        }
        builder.build()
    }

    /// Program to execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Environment variable set for the process, if any.
    pub fn env(&self) -> Option<&RuntimeEnv> {
        self.env.as_ref()
    }

    /// Bundle output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Dependencies appended after the executable.
    pub fn dependencies(&self) -> &[PathBuf] {
        &self.dependencies
    }

    /// Argument vector, excluding the program itself.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(12 + self.dependencies.len());
        args.push("-o".into());
        args.push(self.output.clone().into_os_string());
        args.push("--deps".into());
        args.push("--config-dir".into());
        args.push(self.config_dir.clone().into_os_string());
        args.push("--machine-config".into());
        args.push(self.machine_config.clone().into_os_string());
        args.push("--config".into());
        args.push(self.config.clone().into_os_string());
        args.push("--static".into());
        args.push("-z".into());
        args.push(self.exe.clone().into_os_string());
        args.extend(self.dependencies.iter().map(|d| d.clone().into_os_string()));
        args
    }
}

impl fmt::Display for MkbundleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(env) = &self.env {
            write!(f, "{}={} ", env.name, shell_quote(&env.value))?;
        }
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in self.args() {
            write!(f, " {}", shell_quote(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

/// Quotes `s` for display as a single POSIX shell word.
fn shell_quote(s: &str) -> Cow<'_, str> {
    let safe = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if safe {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("'{}'", s.replace('\'', r"'\''")))
    }
}

/// Builder for [`MkbundleCommand`].
///
/// Every path is required; [`build`](Self::build) fails on the first one left
/// unset instead of producing a half-filled command line.
#[derive(Debug, Default)]
pub struct MkbundleCommandBuilder {
    program: String,
    env: Option<RuntimeEnv>,
    output: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    machine_config: Option<PathBuf>,
    config: Option<PathBuf>,
    exe: Option<PathBuf>,
    dependencies: Vec<PathBuf>,
}

impl MkbundleCommandBuilder {
    /// Creates a builder for `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Sets the environment variable applied to the process.
    pub fn env(mut self, env: RuntimeEnv) -> Self {
        self.env = Some(env);
        self
    }

    /// Sets the bundle output path (`-o`).
    pub fn output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets `--config-dir`.
    pub fn config_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets `--machine-config`.
    pub fn machine_config<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.machine_config = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets `--config`.
    pub fn config<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the executable to embed.
    pub fn exe<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.exe = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the trailing dependency list.
    pub fn dependencies(mut self, deps: Vec<PathBuf>) -> Self {
        self.dependencies = deps;
        self
    }

    /// Builds the command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the program or any path is unset.
    pub fn build(self) -> Result<MkbundleCommand> {
        if self.program.is_empty() {
            return Err(Error::MissingField("program"));
        }

        Ok(MkbundleCommand {
            program: self.program,
            env: self.env,
            output: self.output.ok_or(Error::MissingField("output"))?,
            config_dir: self.config_dir.ok_or(Error::MissingField("config_dir"))?,
            machine_config: self
                .machine_config
                .ok_or(Error::MissingField("machine_config"))?,
            config: self.config.ok_or(Error::MissingField("config"))?,
            exe: self.exe.ok_or(Error::MissingField("exe"))?,
            dependencies: self.dependencies,
        })
    }
}
