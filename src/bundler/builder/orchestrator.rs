//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the bundler
//! once per target and installs the web host executable afterwards.

use crate::bundler::{
    BundledArtifact, MkbundleCommand, Result, Settings, TargetKind,
    deps::collect_target_dependencies,
    error::{Context, ErrorExt},
    runner::run_command,
    utils::fs::copy_file,
};

use super::{checksum::calculate_sha256, tool_detection::locate_tool};

/// Main bundler orchestrator.
///
/// Runs strictly in sequence: each bundler process is awaited before the next
/// step starts, and the first failure aborts the rest of the run. Nothing is
/// rolled back.
///
/// # Examples
///
/// ```no_run
/// use gatorshare_bundler::bundler::{Bundler, Settings};
///
/// # async fn example(settings: Settings) -> gatorshare_bundler::bundler::Result<()> {
/// let bundler = Bundler::new(settings);
/// let artifacts = bundler.bundle_all(false).await?;
///
/// for artifact in artifacts {
///     println!("Created: {} -> {}", artifact.target, artifact.path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    dry_run: bool,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            dry_run: false,
        }
    }

    /// Enables dry-run mode: commands are assembled but never executed, and
    /// no files are copied.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns whether this bundler only prints commands.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Scans dependencies for `target` and assembles its bundler command.
    ///
    /// The directory walk runs on the blocking thread pool.
    pub async fn command_for(&self, target: TargetKind) -> Result<MkbundleCommand> {
        let settings = self.settings.clone();
        let deps = tokio::task::spawn_blocking(move || {
            collect_target_dependencies(&settings, target)
        })
        .await
        .context("Dependency scan task panicked")??;

        MkbundleCommand::for_target(&self.settings, target, deps)
    }

    /// Bundles a single target.
    ///
    /// # Errors
    ///
    /// Fails if the dependency directory is missing, the bundler is not on
    /// PATH, the bundler exits unsuccessfully, or no bundle appears at the
    /// output path afterwards.
    pub async fn bundle(&self, target: TargetKind) -> Result<BundledArtifact> {
        log::info!("Bundling {}", target);

        let command = self.command_for(target).await?;
        let path = command.output().to_path_buf();

        if self.dry_run {
            return Ok(BundledArtifact {
                target,
                path,
                command: command.to_string(),
                size: None,
                checksum: None,
            });
        }

        locate_tool(command.program())?;
        run_command(&command).await?;

        let metadata = tokio::fs::metadata(&path)
            .await
            .fs_context("reading bundle written by the bundler", &path)?;
        let checksum = calculate_sha256(&path).await?;

        log::info!("✓ Created {} bundle: {}", target, path.display());

        Ok(BundledArtifact {
            target,
            path,
            command: command.to_string(),
            size: Some(metadata.len()),
            checksum: Some(checksum),
        })
    }

    /// Copies the web host executable into the server bin location.
    ///
    /// When `server_bin` is an existing directory the executable lands inside
    /// it under its own file name.
    pub async fn install_server_host(&self) -> Result<()> {
        let paths = self.settings.paths();
        if self.dry_run {
            log::info!(
                "Would copy {} -> {}",
                paths.xsp_exe.display(),
                paths.server_bin.display()
            );
            return Ok(());
        }

        log::info!(
            "Copying {} -> {}",
            paths.xsp_exe.display(),
            paths.server_bin.display()
        );
        let dest = copy_file(&paths.xsp_exe, &paths.server_bin).await?;
        log::info!("✓ Installed web host: {}", dest.display());
        Ok(())
    }

    /// Full run: server, optional compiler, client, then the server host copy.
    ///
    /// Stops at the first failing step; the copy only happens after every
    /// bundle succeeded.
    pub async fn bundle_all(&self, include_compiler: bool) -> Result<Vec<BundledArtifact>> {
        let mut artifacts = Vec::new();
        for target in Self::sequence(include_compiler) {
            artifacts.push(self.bundle(target).await?);
        }

        self.install_server_host().await?;

        Ok(artifacts)
    }

    /// Targets of a full run, in execution order.
    pub fn sequence(include_compiler: bool) -> Vec<TargetKind> {
        let [server, client] = TargetKind::DEFAULT_SEQUENCE;
        if include_compiler {
            vec![server, TargetKind::Compiler, client]
        } else {
            vec![server, client]
        }
    }
}
