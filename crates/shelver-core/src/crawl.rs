//! Source tree enumeration.
//!
//! Yields every entry under a root whose final suffix exactly matches one of
//! the configured extensions. Matching is case-sensitive: `epub` does not
//! match `BOOK.EPUB` unless `EPUB` is configured too.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::source::extension_of;

/// Lazily walks `root`, yielding candidate paths in file-name order per directory.
///
/// Directories whose name matches an extension are yielded as well; the caller
/// decides what to do with non-regular files. A directory that resolves to
/// `exclude` (the canonical destination root when it lies inside the source)
/// is never descended into, whichever spelling leads to it.
pub fn crawl<'a>(
    root: &Path,
    extensions: &'a [String],
    exclude: Option<&'a Path>,
) -> impl Iterator<Item = walkdir::Result<PathBuf>> + 'a {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| exclude.map_or(true, |ex| !resolves_to(entry, ex)))
        .filter_map(move |entry| match entry {
            Ok(entry) if matches_extension(&entry, extensions) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
}

fn resolves_to(entry: &DirEntry, target: &Path) -> bool {
    entry.file_type().is_dir() && fs::canonicalize(entry.path()).is_ok_and(|p| p == target)
}

fn matches_extension(entry: &DirEntry, extensions: &[String]) -> bool {
    extension_of(entry.path()).is_some_and(|ext| extensions.iter().any(|e| e == ext))
}
