//! Streaming file copy used by the cross-device move fallback.
//!
//! - Writes to a newly created destination file (`create_new`; never clobbers),
//!   so a destination name lost to a concurrent writer fails instead of
//!   overwriting foreign data.
//! - Buffered I/O with large (1 MiB) buffers to reduce syscall count.
//! - Fsyncs the destination before returning.
//!
//! Snapshot semantics: the source is read once from start to EOF; concurrent
//! growth is not included, truncation surfaces as a read error or short copy.
//! Callers own cleanup of the destination on failure.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` -> `dst` with buffered I/O; returns the number of bytes written.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(bytes)
}
