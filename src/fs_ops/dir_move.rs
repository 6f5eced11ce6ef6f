//! Directory move mechanics.
//! Tries a rename first; if that fails, recreates the tree at the target
//! (files copied in parallel) and removes the source.
//!
//! Invariants:
//! - The target directory is created with `create_dir`, so a name lost to a
//!   concurrent writer fails instead of merging into a foreign directory.
//! - A partially-built target is removed (best-effort) when the fallback fails
//!   before the source was touched.
//! - If the copied tree is complete but the source cannot be removed, the copy
//!   is kept and the error propagated; data preservation wins over symmetry.

use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

use super::io_copy::copy_streaming;
use super::meta::preserve_file_times;

/// Move the directory `src` to the already-resolved, collision-free `target`.
pub(super) fn move_dir(src: &Path, target: &Path) -> io::Result<()> {
    if fs::rename(src, target).is_ok() {
        info!(src = %src.display(), dest = %target.display(), "renamed directory atomically");
        return Ok(());
    }

    fs::create_dir(target)?;

    if let Err(e) = copy_tree(src, target) {
        let _ = fs::remove_dir_all(target);
        return Err(e);
    }

    fs::remove_dir_all(src)?;
    info!(src = %src.display(), dest = %target.display(), "copied directory contents and removed source");
    Ok(())
}

fn copy_tree(src: &Path, target: &Path) -> io::Result<()> {
    // Skeleton pass: create all subdirectories first.
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(io::Error::other)?;
        if entry.file_type().is_dir() {
            let rel = entry.path().strip_prefix(src).map_err(io::Error::other)?;
            fs::create_dir_all(target.join(rel))?;
        }
    }

    let files: Vec<_> = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    files.par_iter().try_for_each(|path| -> io::Result<()> {
        let rel = path.strip_prefix(src).map_err(io::Error::other)?;
        let dst = target.join(rel);
        let src_meta = fs::metadata(path)?;
        copy_streaming(path, &dst)?;
        preserve_file_times(&dst, &src_meta);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn move_dir_renames_within_device() {
        let td = tempdir().unwrap();
        let src = td.path().join("folder");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("one.txt"), b"one").unwrap();
        fs::create_dir(src.join("sub")).unwrap();
        fs::write(src.join("sub").join("two.txt"), b"two").unwrap();

        let target = td.path().join("moved");
        move_dir(&src, &target).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(target.join("one.txt")).unwrap(), b"one");
        assert_eq!(fs::read(target.join("sub").join("two.txt")).unwrap(), b"two");
    }

    #[test]
    fn copy_tree_reproduces_nested_layout() {
        let td = tempdir().unwrap();
        let src = td.path().join("tree");
        fs::create_dir_all(src.join("a/b")).unwrap();
        fs::write(src.join("a/x.txt"), b"x").unwrap();
        fs::write(src.join("a/b/y.txt"), b"y").unwrap();

        let target = td.path().join("out");
        fs::create_dir(&target).unwrap();
        copy_tree(&src, &target).unwrap();

        assert_eq!(fs::read(target.join("a/x.txt")).unwrap(), b"x");
        assert_eq!(fs::read(target.join("a/b/y.txt")).unwrap(), b"y");
        // Source untouched by the copy pass.
        assert!(src.join("a/x.txt").exists());
    }
}
