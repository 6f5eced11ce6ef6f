//! Persisted favorites list.
//!
//! One JSON array of path strings in a single file owned by this store.
//! Ordering is insertion order; duplicates (after normalization) are
//! forbidden. A missing or malformed record degrades to an empty list and is
//! logged, never raised. Saves go through a temp file + rename so a crash
//! mid-write cannot corrupt the previous record.
//!
//! The store does no locking of its own; callers serialize add/save sequences.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::FileNestError;

#[derive(Debug, Clone)]
pub struct FavoritesStore {
    file: PathBuf,
    entries: Vec<PathBuf>,
}

impl FavoritesStore {
    /// Load the record at `file`, degrading to an empty list on a missing or
    /// malformed record.
    pub fn open(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let entries = match fs::read_to_string(&file) {
            Ok(text) => match serde_json::from_str::<Vec<PathBuf>>(&text) {
                Ok(list) => list,
                Err(e) => {
                    warn!(path = %file.display(), error = %e, "malformed favorites record; starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(cause) => {
                let err = FileNestError::PersistenceReadFailed {
                    path: file.clone(),
                    cause,
                };
                warn!(error = %err, "favorites record unreadable; starting empty");
                Vec::new()
            }
        };
        debug!(path = %file.display(), count = entries.len(), "loaded favorites");
        Self { file, entries }
    }

    /// Path of the on-disk record this store owns.
    pub fn record_path(&self) -> &Path {
        &self.file
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `path` (normalized) if not already present. Returns whether the
    /// list changed.
    pub fn add(&mut self, path: &Path) -> bool {
        let normalized = normalize(path);
        if self.entries.contains(&normalized) {
            return false;
        }
        self.entries.push(normalized);
        true
    }

    /// Remove `path` (normalized) if present. Returns whether the list changed.
    pub fn remove(&mut self, path: &Path) -> bool {
        let normalized = normalize(path);
        let before = self.entries.len();
        self.entries.retain(|e| *e != normalized);
        self.entries.len() != before
    }

    /// Partition entries by current filesystem existence into
    /// (still_valid, removed) without mutating the store.
    pub fn validate(&self) -> (Vec<PathBuf>, Vec<PathBuf>) {
        self.entries
            .iter()
            .cloned()
            .partition(|entry| entry.exists())
    }

    /// Drop stale entries in place and return them; callers persist the
    /// pruned list with `save`.
    pub fn prune(&mut self) -> Vec<PathBuf> {
        let (valid, removed) = self.validate();
        if !removed.is_empty() {
            info!(removed = removed.len(), "pruned stale favorites");
            self.entries = valid;
        }
        removed
    }

    /// Write the full list atomically: temp file in the record's directory,
    /// fsync, rename over the record.
    pub fn save(&self) -> Result<(), FileNestError> {
        let write_err = |cause: io::Error| FileNestError::PersistenceWriteFailed {
            path: self.file.clone(),
            cause,
        };

        if let Some(parent) = self.file.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| write_err(io::Error::other(e)))?;

        let tmp = self
            .file
            .with_file_name(format!(".filenest.favorites.{}.tmp", std::process::id()));
        let result = (|| -> io::Result<()> {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(&json)?;
            f.sync_all()?;
            fs::rename(&tmp, &self.file)
        })();
        if let Err(cause) = result {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(cause));
        }
        debug!(path = %self.file.display(), count = self.entries.len(), "saved favorites");
        Ok(())
    }
}

/// Canonical form used for equality: resolved path when the target exists,
/// the given path otherwise. `dunce` keeps Windows results un-UNC-prefixed.
fn normalize(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
