//! Timestamp/permission preservation for copy-fallback moves.
//! - Copies atime/mtime and, on Unix, mode bits from already-fetched source
//!   metadata onto the freshly written destination.
//! - Best-effort: failures are logged and ignored; a move never fails because
//!   a timestamp could not be set.

use filetime::FileTime;
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

/// Preserve metadata on `dest` using already-fetched `src_meta`.
/// Callers pass source metadata to avoid re-statting a source that is gone.
pub(super) fn preserve_file_times(dest: &Path, src_meta: &fs::Metadata) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let mt = FileTime::from_unix_time(src_meta.mtime(), src_meta.mtime_nsec() as u32);
        let at = FileTime::from_unix_time(src_meta.atime(), src_meta.atime_nsec() as u32);
        if let Err(e) = filetime::set_file_times(dest, at, mt) {
            warn!(path = %dest.display(), error = %e, "failed to set atime/mtime on destination");
        } else {
            trace!(path = %dest.display(), "set atime/mtime on destination");
        }
    }
    #[cfg(not(unix))]
    {
        if let (Ok(at), Ok(mt)) = (src_meta.accessed(), src_meta.modified()) {
            let at = FileTime::from_system_time(at);
            let mt = FileTime::from_system_time(mt);
            if let Err(e) = filetime::set_file_times(dest, at, mt) {
                warn!(path = %dest.display(), error = %e, "failed to set atime/mtime on destination");
            } else {
                trace!(path = %dest.display(), "set atime/mtime on destination");
            }
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let src_mode = src_meta.permissions().mode() & 0o777;
        let perms = fs::Permissions::from_mode(src_mode);
        if let Err(e) = fs::set_permissions(dest, perms) {
            warn!(path = %dest.display(), mode = format!("{:o}", src_mode), error = %e, "failed to set permissions on destination");
        }
    }
    #[cfg(windows)]
    {
        let ro = src_meta.permissions().readonly();
        if let Ok(meta) = fs::metadata(dest) {
            let mut perms = meta.permissions();
            perms.set_readonly(ro);
            let _ = fs::set_permissions(dest, perms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    #[test]
    fn copies_mtime_onto_destination() {
        let td = tempdir().unwrap();
        let src = td.path().join("a");
        let dst = td.path().join("b");
        fs::write(&src, b"x").unwrap();
        fs::write(&dst, b"x").unwrap();

        let ts = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&src, ts).unwrap();

        let meta = fs::metadata(&src).unwrap();
        preserve_file_times(&dst, &meta);

        let got = FileTime::from_last_modification_time(&fs::metadata(&dst).unwrap());
        assert_eq!(got.unix_seconds(), ts.unix_seconds());
    }
}
