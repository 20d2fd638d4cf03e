//! Dependency discovery for bundle targets.
//!
//! Walks a library directory and collects every file whose name ends with the
//! configured suffix. Matching is case-sensitive: `a.dll` matches `.dll`,
//! `c.DLL` does not.

use crate::{
    bail,
    bundler::{Result, Settings, TargetKind, error::ErrorExt},
};
use std::path::{Path, PathBuf};

/// Recursively collects files under `root` whose file name ends with `suffix`.
///
/// Order follows the directory walk and is not sorted. Directories whose name
/// happens to match the suffix are skipped.
///
/// # Errors
///
/// Fails if `root` does not exist, is not a directory, or any entry cannot be
/// read during the walk.
pub fn discover_dependencies(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root).fs_context("reading dependency directory", root)?;
    if !metadata.is_dir() {
        bail!("dependency root {} is not a directory", root.display());
    }

    let mut found = Vec::new();
    for entry in walkdir::WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(suffix.as_bytes())
        {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

/// Full dependency list for `target`: seeded names first, then scanned files.
pub fn collect_target_dependencies(settings: &Settings, target: TargetKind) -> Result<Vec<PathBuf>> {
    let mut deps: Vec<PathBuf> = settings
        .seed_dependencies(target)
        .iter()
        .map(PathBuf::from)
        .collect();

    if let Some(root) = settings.dependency_root(target) {
        let scanned = discover_dependencies(root, &settings.tools().dependency_suffix)?;
        log::debug!(
            "Found {} {} dependencies under {}",
            scanned.len(),
            target,
            root.display()
        );
        for dep in &scanned {
            log::debug!("  - {}", dep.display());
        }
        deps.extend(scanned);
    }

    Ok(deps)
}
