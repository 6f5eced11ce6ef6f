//! Single-entry management operations behind a browser's menus:
//! create folder, rename in place, delete.
//!
//! Unlike the batch move engine these are one-shot calls; errors carry
//! actionable context and propagate directly to the caller.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Create `parent/name` as a new directory. Fails if it already exists.
pub fn create_folder(parent: &Path, name: &str) -> Result<PathBuf> {
    if name.is_empty() {
        bail!("Folder name must not be empty");
    }
    let path = parent.join(name);
    fs::create_dir(&path)
        .with_context(|| format!("Failed to create folder '{}'", path.display()))?;
    info!(path = %path.display(), "created folder");
    Ok(path)
}

/// Rename `path` to `new_name` within its parent directory.
/// Refuses to clobber an existing sibling of that name.
pub fn rename_entry(path: &Path, new_name: &str) -> Result<PathBuf> {
    if new_name.is_empty() {
        bail!("New name must not be empty");
    }
    let parent = path
        .parent()
        .with_context(|| format!("'{}' has no parent directory", path.display()))?;
    let target = parent.join(new_name);
    if target.exists() {
        bail!("'{}' already exists", target.display());
    }
    fs::rename(path, &target).with_context(|| {
        format!(
            "Failed to rename '{}' -> '{}'",
            path.display(),
            target.display()
        )
    })?;
    info!(from = %path.display(), to = %target.display(), "renamed entry");
    Ok(target)
}

/// Delete a file or directory tree.
pub fn delete_entry(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path)
        .with_context(|| format!("Cannot stat '{}'", path.display()))?;
    if meta.file_type().is_dir() {
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to delete directory '{}'", path.display()))?;
    } else {
        fs::remove_file(path)
            .with_context(|| format!("Failed to delete '{}'", path.display()))?;
    }
    info!(path = %path.display(), "deleted entry");
    Ok(())
}
