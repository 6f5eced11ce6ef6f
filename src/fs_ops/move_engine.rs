//! Best-effort batch move engine.
//!
//! Each request is validated, given a collision-free destination name, and
//! executed independently; one request's failure never aborts the others.
//! Failures are data (`MoveReport`), not exceptions, so callers can render a
//! per-item outcome for a whole drag-and-drop batch.
//!
//! Requests run sequentially so two same-named sources in one batch cannot
//! race each other's name resolution; the parallelism lives inside directory
//! moves, where file copies share no destination names.
//!
//! The engine does not notify anyone of the mutation; callers refresh their
//! own directory views after a batch completes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::FileNestError;

use super::dir_move::move_dir;
use super::file_move::move_file;
use super::resolve::resolve_destination;

/// One item of a move batch: put `source` into `destination_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub source: PathBuf,
    pub destination_dir: PathBuf,
}

impl MoveRequest {
    pub fn new(source: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination_dir: destination_dir.into(),
        }
    }
}

/// Per-item outcome. On success carries the destination actually used, which
/// may differ from the naive `dir/name` due to collision renaming.
#[derive(Debug)]
pub struct MoveReport {
    pub source: PathBuf,
    pub outcome: Result<PathBuf, FileNestError>,
}

impl MoveReport {
    pub fn final_destination(&self) -> Option<&Path> {
        self.outcome.as_ref().ok().map(PathBuf::as_path)
    }

    pub fn error(&self) -> Option<&FileNestError> {
        self.outcome.as_ref().err()
    }
}

/// Execute a batch of move requests; reports come back in request order.
pub fn move_many(requests: &[MoveRequest]) -> Vec<MoveReport> {
    requests
        .iter()
        .map(|req| MoveReport {
            source: req.source.clone(),
            outcome: move_entry(req),
        })
        .collect()
}

/// Execute a single move request.
pub fn move_entry(req: &MoveRequest) -> Result<PathBuf, FileNestError> {
    let dest_dir = &req.destination_dir;
    if !dest_dir.is_dir() {
        return Err(FileNestError::InvalidDestination(dest_dir.clone()));
    }

    let src = &req.source;
    let file_name = src.file_name().ok_or_else(|| FileNestError::MoveFailed {
        path: src.clone(),
        cause: io::Error::new(
            io::ErrorKind::InvalidInput,
            "source path has no file name component",
        ),
    })?;

    // Symlink-aware stat: links are dispatched without being followed.
    let lmeta = fs::symlink_metadata(src).map_err(|cause| FileNestError::MoveFailed {
        path: src.clone(),
        cause,
    })?;
    let ftype = lmeta.file_type();

    let dest = resolve_destination(dest_dir, file_name)?;
    debug!(src = %src.display(), dest = %dest.display(), is_dir = ftype.is_dir(), "dispatching move");

    let result = if ftype.is_dir() {
        move_dir(src, &dest)
    } else if ftype.is_symlink() {
        // Rename moves the link itself; there is no copy fallback because
        // copying would dereference the link and duplicate its target.
        fs::rename(src, &dest)
    } else {
        move_file(src, &dest)
    };

    match result {
        Ok(()) => Ok(dest),
        Err(cause) => {
            warn!(src = %src.display(), dest = %dest.display(), error = %cause, "move failed");
            Err(FileNestError::MoveFailed {
                path: src.clone(),
                cause,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn invalid_destination_leaves_source_alone() {
        let td = tempdir().unwrap();
        let src = td.path().join("keep.txt");
        fs::write(&src, b"keep").unwrap();

        let req = MoveRequest::new(&src, td.path().join("no-such-dir"));
        let err = move_entry(&req).unwrap_err();
        assert!(matches!(err, FileNestError::InvalidDestination(_)));
        assert_eq!(fs::read(&src).unwrap(), b"keep");
    }

    #[test]
    fn missing_source_is_a_move_failure() {
        let td = tempdir().unwrap();
        let dest = td.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let req = MoveRequest::new(td.path().join("ghost.txt"), &dest);
        let err = move_entry(&req).unwrap_err();
        assert!(matches!(err, FileNestError::MoveFailed { .. }));
    }

    #[test]
    fn reports_come_back_in_request_order() {
        let td = tempdir().unwrap();
        let dest = td.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let mut requests = Vec::new();
        for i in 0..8 {
            let src = td.path().join(format!("f{i}.txt"));
            fs::write(&src, format!("{i}")).unwrap();
            requests.push(MoveRequest::new(src, &dest));
        }
        let reports = move_many(&requests);
        assert_eq!(reports.len(), requests.len());
        for (report, req) in reports.iter().zip(&requests) {
            assert_eq!(report.source, req.source);
            assert!(report.outcome.is_ok());
        }
    }
}
