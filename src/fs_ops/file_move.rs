//! Single-file move mechanics.
//! Attempts an atomic rename; on cross-filesystem or other rename errors,
//! falls back to streaming copy + remove-original.
//!
//! Invariants:
//! - The destination is opened `create_new` by the fallback, so a name lost to
//!   a concurrent writer fails instead of overwriting.
//! - A partial destination written by us is removed on failure.
//! - If the move did not complete, the source is left untouched; if the source
//!   cannot be removed after a successful copy, the copy is removed so the
//!   filesystem ends up unchanged.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use super::io_copy::copy_streaming;
use super::meta::preserve_file_times;

/// Move `src` to the already-resolved, collision-free `dest` path.
pub(super) fn move_file(src: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "renamed file atomically");
            Ok(())
        }
        Err(e) => {
            #[cfg(unix)]
            let hint: &str = match e.raw_os_error() {
                Some(code) if code == libc::EXDEV => "cross-filesystem; will copy instead",
                Some(code) if code == libc::EACCES || code == libc::EPERM => {
                    "permission denied; check destination perms"
                }
                _ => "falling back to copy",
            };
            #[cfg(not(unix))]
            let hint: &str = match e.kind() {
                io::ErrorKind::PermissionDenied => "permission denied; check destination perms",
                _ => "falling back to copy",
            };
            warn!(error = %e, hint, "atomic rename failed, using copy+remove");

            copy_then_remove(src, dest)
        }
    }
}

fn copy_then_remove(src: &Path, dest: &Path) -> io::Result<()> {
    // Stat before copying so timestamps survive even a fast source removal.
    let src_meta = fs::metadata(src)?;

    if let Err(copy_err) = copy_streaming(src, dest) {
        // AlreadyExists means create_new lost the name to another writer and
        // we wrote nothing; anything else may have left our partial file.
        if copy_err.kind() != io::ErrorKind::AlreadyExists {
            let _ = fs::remove_file(dest);
        }
        return Err(copy_err);
    }

    preserve_file_times(dest, &src_meta);

    if let Err(rm_err) = fs::remove_file(src) {
        let _ = fs::remove_file(dest);
        return Err(rm_err);
    }

    info!(src = %src.display(), dest = %dest.display(), "copied file and removed source");
    Ok(())
}
