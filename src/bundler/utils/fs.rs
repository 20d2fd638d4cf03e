//! File system utilities for bundling.

use crate::{
    bail,
    bundler::{
        Result,
        error::{Context, ErrorExt},
    },
};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// If `to` is an existing directory the file is placed inside it under its
/// own name. An existing destination file is overwritten. Returns the path
/// actually written.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<PathBuf> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading copy source", from)?;
    if !metadata.is_file() {
        bail!("{from:?} is not a file");
    }

    let dest = if fs::metadata(to).await.is_ok_and(|m| m.is_dir()) {
        to.join(from.file_name().context("copy source has no file name")?)
    } else {
        if let Some(dest_dir) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dest_dir)
                .await
                .fs_context("creating copy destination directory", dest_dir)?;
        }
        to.to_path_buf()
    };

    fs::copy(from, &dest).await.fs_context("copying file", &dest)?;
    Ok(dest)
}
