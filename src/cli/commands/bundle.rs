//! The bundle command: load settings, run the requested targets, report artifacts.

use crate::bundler::{BundledArtifact, Bundler, TargetKind};
use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::manifest::load_settings;

/// Execute the bundle command.
///
/// A single `--target server` also installs the web host executable, matching
/// the full run; other single targets only produce their bundle.
pub async fn execute(args: &Args, runtime_config: &RuntimeConfig) -> Result<i32> {
    let target = args.selected_target();

    runtime_config.verbose_println(&format!(
        "Loading settings from {}",
        args.config.display()
    ))?;
    let settings = load_settings(&args.config)?;
    let bundler = Bundler::new(settings).dry_run(args.dry_run);

    if args.dry_run {
        runtime_config.warn("Dry run: commands are printed, nothing is executed")?;
    }

    let artifacts = match target {
        None => {
            runtime_config.section("Bundling all targets")?;
            bundler.bundle_all(args.with_compiler).await?
        }
        Some(kind) => {
            runtime_config.section(&format!("Bundling {}", kind))?;
            let artifact = bundler.bundle(kind).await?;
            if kind == TargetKind::Server {
                bundler.install_server_host().await?;
            }
            vec![artifact]
        }
    };

    for artifact in &artifacts {
        report(runtime_config, artifact, args.dry_run)?;
    }

    if !args.dry_run && target.is_none_or(|k| k == TargetKind::Server) {
        let paths = bundler.settings().paths();
        runtime_config.success(&format!(
            "Installed {} -> {}",
            paths.xsp_exe.display(),
            paths.server_bin.display()
        ))?;
    }

    Ok(0)
}

fn report(runtime_config: &RuntimeConfig, artifact: &BundledArtifact, dry_run: bool) -> Result<()> {
    if dry_run {
        runtime_config.progress(&format!("{}:", artifact.target))?;
        runtime_config.indent(&artifact.command)?;
        return Ok(());
    }

    runtime_config.success(&format!(
        "Created {} bundle: {}",
        artifact.target,
        artifact.path.display()
    ))?;
    if let Some(size) = artifact.size {
        runtime_config.indent(&format!("size: {} bytes", size))?;
    }
    if let Some(checksum) = &artifact.checksum {
        runtime_config.indent(&format!("sha256: {}", checksum))?;
    }
    runtime_config.verbose_println(&format!("   command: {}", artifact.command))?;
    Ok(())
}
