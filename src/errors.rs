//! Typed error definitions for filenest.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Batch operations (moves, favorites) return these as per-item data rather
//! than raising them: one item's failure never aborts the rest of a batch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileNestError {
    /// The requested destination folder is missing or not a directory.
    #[error("Destination is not an existing directory: {0}")]
    InvalidDestination(PathBuf),

    /// A move did not complete; the source is left untouched and any partial
    /// destination has been removed.
    #[error("Move failed for '{path}': {cause}")]
    MoveFailed {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// No free " (n)" variant was found near the candidate within the probe cap.
    #[error("No collision-free name near '{candidate}' after {probes} attempts")]
    ResolutionExhausted { candidate: PathBuf, probes: u64 },

    /// The search root is empty, missing, or not a directory.
    #[error("Search root is not an existing directory: {0}")]
    InvalidRoot(PathBuf),

    /// The favorites record could not be read; callers degrade to an empty list.
    #[error("Failed to read favorites record '{path}': {cause}")]
    PersistenceReadFailed {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// The favorites record could not be written; the previous record on disk
    /// is left intact.
    #[error("Failed to write favorites record '{path}': {cause}")]
    PersistenceWriteFailed {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
}
