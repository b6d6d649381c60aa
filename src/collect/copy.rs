// src/collect/copy.rs

use filetime::FileTime;
use std::fs;
use std::io;
use std::path::Path;

/// Copies `src` to `dest`, creating `dest`'s parent directories, and
/// carries over the source's permissions and timestamps.
///
/// `fs::copy` already replicates the permission bits; the access and
/// modification times are applied afterwards so the output tree mirrors the
/// source metadata, not the collection time.
pub(crate) fn copy_with_metadata(src: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)?;

    let metadata = fs::metadata(src)?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(dest, atime, mtime)?;
    Ok(())
}
