//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log/favorites paths and detects symlinked
//! ancestors for safety.

use dirs::{config_dir, data_dir, home_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// OS-appropriate default config path. `FILENEST_CONFIG` overrides it.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os("FILENEST_CONFIG") {
        return Some(PathBuf::from(explicit));
    }
    if let Some(mut base) = config_dir() {
        base.push("filenest");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("filenest")
                .join("config.xml")
        })
    }
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("filenest");
        base.push("filenest.log");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("filenest")
                .join("filenest.log")
        })
    }
}

/// OS-appropriate default favorites record path (data dir).
pub fn default_favorites_path() -> Option<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("filenest");
        base.push("favorites.json");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("filenest")
                .join("favorites.json")
        })
    }
}

/// Default browse root: the user's home directory, falling back to cwd.
pub fn default_root() -> PathBuf {
    home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
