//! Entry metadata for a details panel.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// Snapshot of one filesystem entry, as shown next to a selection.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    /// Byte size for files; 0 for directories and special entries.
    pub size: u64,
    pub modified: Option<SystemTime>,
}

pub fn entry_info(path: &Path) -> Result<EntryInfo> {
    let meta = fs::symlink_metadata(path)
        .with_context(|| format!("Cannot stat '{}'", path.display()))?;
    let kind = if meta.is_dir() {
        EntryKind::Dir
    } else if meta.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };
    Ok(EntryInfo {
        path: path.to_path_buf(),
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        kind,
        size: if kind == EntryKind::File { meta.len() } else { 0 },
        modified: meta.modified().ok(),
    })
}

/// Human-readable size: whole units through TB, one decimal for PB.
pub fn readable_size(bytes: u64) -> String {
    let mut n = bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if n < 1024.0 {
            return format!("{n:.0}{unit}");
        }
        n /= 1024.0;
    }
    format!("{n:.1}PB")
}
