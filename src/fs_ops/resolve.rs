//! Collision-safe destination naming.
//!
//! Policy:
//! - If `dir/name` is free, use it unchanged.
//! - Otherwise append " (n)" before the extension, probing n = 1, 2, ... and
//!   returning the first free variant.
//!
//! Notes:
//! - Stem/extension follow `Path::file_stem`/`Path::extension` semantics:
//!   dotfiles keep their whole name as the stem (".env" -> ".env (1)") and
//!   only the last extension moves ("archive.tar.gz" -> "archive.tar (1).gz").
//! - Non-UTF8 names are preserved via OsString.
//! - This only decides a name from current filesystem state; the probe and the
//!   eventual write are not atomic against concurrent external writers, so a
//!   lost race surfaces later as a move failure, never as an overwrite.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::errors::FileNestError;

/// Upper bound on " (n)" probes before giving up with `ResolutionExhausted`.
/// Real collision chains are tiny; the cap only guards pathological directories.
pub const MAX_NAME_PROBES: u64 = 100_000;

/// Compute a collision-free destination for `name` inside `dest_dir`.
pub fn resolve_destination(dest_dir: &Path, name: &OsStr) -> Result<PathBuf, FileNestError> {
    let candidate = dest_dir.join(name);
    if !candidate.exists() {
        return Ok(candidate);
    }

    // Extract stem and extension, preserving non-UTF8 via OsString.
    let base = Path::new(name);
    let stem: OsString = base
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| name.to_os_string());
    let ext: Option<OsString> = base.extension().map(|e| e.to_os_string());

    for n in 1..=MAX_NAME_PROBES {
        let probe = dest_dir.join(build_name_with_suffix(&stem, ext.as_deref(), n));
        if !probe.exists() {
            return Ok(probe);
        }
        if n == 3 {
            trace!(name = ?name, dir = %dest_dir.display(), "multiple collisions, continuing to probe");
        }
    }

    Err(FileNestError::ResolutionExhausted {
        candidate,
        probes: MAX_NAME_PROBES,
    })
}

/// Build "<stem> (n)[.<ext>]" as an OsString.
fn build_name_with_suffix(stem: &OsStr, ext: Option<&OsStr>, n: u64) -> OsString {
    let mut out = OsString::new();
    out.push(stem);
    out.push(format!(" ({n})"));
    if let Some(e) = ext {
        out.push(".");
        out.push(e);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn free_name_is_returned_unchanged() {
        let td = tempdir().unwrap();
        let dst = resolve_destination(td.path(), OsStr::new("file.txt")).unwrap();
        assert_eq!(dst, td.path().join("file.txt"));
    }

    #[test]
    fn first_collision_gets_suffix_one() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("file.txt"), b"x").unwrap();
        let dst = resolve_destination(td.path(), OsStr::new("file.txt")).unwrap();
        assert_eq!(dst, td.path().join("file (1).txt"));
    }

    #[test]
    fn smallest_unused_suffix_wins() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("file.txt"), b"1").unwrap();
        fs::write(td.path().join("file (1).txt"), b"2").unwrap();
        fs::write(td.path().join("file (3).txt"), b"4").unwrap();
        let dst = resolve_destination(td.path(), OsStr::new("file.txt")).unwrap();
        assert_eq!(dst, td.path().join("file (2).txt"));
    }

    #[test]
    fn dotfile_keeps_whole_name_as_stem() {
        let td = tempdir().unwrap();
        fs::write(td.path().join(".env"), b"a").unwrap();
        let dst = resolve_destination(td.path(), OsStr::new(".env")).unwrap();
        assert_eq!(dst, td.path().join(".env (1)"));
    }

    #[test]
    fn only_last_extension_moves() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("archive.tar.gz"), b"a").unwrap();
        let dst = resolve_destination(td.path(), OsStr::new("archive.tar.gz")).unwrap();
        assert_eq!(dst, td.path().join("archive.tar (1).gz"));
    }

    #[test]
    fn directories_collide_like_files() {
        let td = tempdir().unwrap();
        fs::create_dir(td.path().join("folder")).unwrap();
        let dst = resolve_destination(td.path(), OsStr::new("folder")).unwrap();
        assert_eq!(dst, td.path().join("folder (1)"));
    }
}
