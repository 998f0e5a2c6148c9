//! Snapshot of a candidate file: path, format tag and filesystem attributes.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Size and timestamps used to compare two files during conflict resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    pub size: u64,
    /// Last content modification (mtime).
    pub modified: SystemTime,
    /// Last attribute change (ctime). Equal to `modified` where the platform has no ctime.
    pub changed: SystemTime,
}

impl FileStamp {
    pub fn from_metadata(meta: &Metadata) -> io::Result<Self> {
        let modified = meta.modified()?;
        Ok(Self {
            size: meta.len(),
            modified,
            changed: changed_time(meta).unwrap_or(modified),
        })
    }

    pub fn read(path: &Path) -> io::Result<Self> {
        Self::from_metadata(&fs::metadata(path)?)
    }

    /// The later of the modified and changed times.
    pub fn effective_time(&self) -> SystemTime {
        self.modified.max(self.changed)
    }
}

#[cfg(unix)]
fn changed_time(meta: &Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let secs = u64::try_from(meta.ctime()).ok()?;
    let nanos = u32::try_from(meta.ctime_nsec()).ok()?;
    SystemTime::UNIX_EPOCH.checked_add(Duration::new(secs, nanos))
}

#[cfg(not(unix))]
fn changed_time(_meta: &Metadata) -> Option<SystemTime> {
    None
}

/// A regular file found under the source root, inspected once before processing.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Format tag: the file name's final suffix, as found.
    pub format: String,
    pub stamp: FileStamp,
}

impl SourceFile {
    /// Inspects `path`. Returns `Ok(None)` when it is not a regular file.
    pub fn inspect(path: &Path) -> io::Result<Option<Self>> {
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Ok(None);
        }
        Ok(Some(Self {
            path: path.to_path_buf(),
            format: extension_of(path).unwrap_or_default().to_string(),
            stamp: FileStamp::from_metadata(&meta)?,
        }))
    }

    /// The original extension, case preserved (e.g. `epub`, `MOBI`).
    pub fn extension(&self) -> &str {
        &self.format
    }
}

/// Whether `a` and `b` name the same file, however each path is spelled.
///
/// Compares device and inode on unix; elsewhere falls back to canonical paths.
pub fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(file_id(a)? == file_id(b)?)
}

#[cfg(unix)]
fn file_id(path: &Path) -> io::Result<(u64, u64)> {
    use std::os::unix::fs::MetadataExt;

    let meta = fs::metadata(path)?;
    Ok((meta.dev(), meta.ino()))
}

#[cfg(not(unix))]
fn file_id(path: &Path) -> io::Result<PathBuf> {
    fs::canonicalize(path)
}

/// Final suffix of a file name, without the dot.
pub fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
