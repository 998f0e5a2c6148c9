//! Per-file organize pipeline.
//!
//! For each crawled path: inspect, extract identity, derive the destination,
//! then move or hand off to the conflict resolver. Files are processed one at
//! a time in crawl order, and a failure on one file never stops the run.

mod disposition;

use std::fs;
use std::path::{Display, Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::crawl::crawl;
use crate::error::OrganizeError;
use crate::formats::FormatRegistry;
use crate::naming::destination_for;
use crate::resolve::{resolve, Applied};
use crate::source::SourceFile;

pub use disposition::{Disposition, OrganizeReport, Outcome};

/// Relocates ebooks from a source tree into `<destination>/<author>/<title>.<ext>`.
pub struct Organizer<'a> {
    source_root: &'a Path,
    destination_root: &'a Path,
    registry: &'a FormatRegistry,
}

impl<'a> Organizer<'a> {
    pub fn new(
        source_root: &'a Path,
        destination_root: &'a Path,
        registry: &'a FormatRegistry,
    ) -> Self {
        Self {
            source_root,
            destination_root,
            registry,
        }
    }

    /// Crawls the source root for `extensions` and processes every candidate.
    ///
    /// Creates the destination root if needed. Only an unusable source or
    /// destination root is an error; per-file problems end up in the report.
    pub fn organize(&self, extensions: &[String]) -> Result<OrganizeReport> {
        let meta = fs::metadata(self.source_root)
            .with_context(|| format!("cannot read source root {}", self.source_root.display()))?;
        if !meta.is_dir() {
            bail!("source root is not a directory: {}", self.source_root.display());
        }
        fs::create_dir_all(self.destination_root).with_context(|| {
            format!(
                "failed to create destination root {}",
                self.destination_root.display()
            )
        })?;

        let source_root = canonical_root(self.source_root)?;
        let destination_root = canonical_root(self.destination_root)?;
        // Organizing in place must still visit the destination tree.
        let exclude = (destination_root != source_root).then_some(destination_root.as_path());

        let mut report = OrganizeReport::default();
        for entry in crawl(self.source_root, extensions, exclude) {
            match entry {
                Ok(path) => self.process(&path, &mut report),
                Err(e) => {
                    report.crawl_errors += 1;
                    tracing::error!(error = %e, "cannot traverse source entry");
                }
            }
        }

        tracing::info!(
            processed = report.outcomes.len(),
            moved = report.count(Disposition::Moved),
            crawl_errors = report.crawl_errors,
            "organize finished"
        );
        Ok(report)
    }

    /// Processes a single path and records its disposition, if it is a regular file.
    pub fn process(&self, path: &Path, report: &mut OrganizeReport) {
        match self.process_file(path) {
            Ok(Some(disposition)) => report.record(path.to_path_buf(), disposition),
            Ok(None) => {}
            Err(err) => {
                self.log_failure(&err);
                report.record(path.to_path_buf(), err.disposition());
            }
        }
    }

    fn process_file(&self, path: &Path) -> Result<Option<Disposition>, OrganizeError> {
        let source = match SourceFile::inspect(path) {
            Ok(Some(source)) => source,
            Ok(None) => {
                tracing::debug!(path = %path.display(), "skipping non-file");
                return Ok(None);
            }
            Err(e) => return Err(OrganizeError::io("stat source", path, e)),
        };

        let identity = self.registry.extract(&source)?;
        let destination = destination_for(self.destination_root, &identity, source.extension())
            .ok_or_else(|| OrganizeError::IncompleteMetadata {
                path: source.path.clone(),
            })?;

        fs::create_dir_all(&destination.directory)
            .map_err(|e| OrganizeError::io("create directory", &destination.directory, e))?;

        let target = destination.path();
        let occupied = target
            .try_exists()
            .map_err(|e| OrganizeError::io("stat destination", &target, e))?;

        let applied = if occupied {
            match resolve(&source, &target)? {
                Some(applied) => applied,
                None => {
                    tracing::debug!(path = %path.display(), "already in place");
                    return Ok(None);
                }
            }
        } else {
            fs::rename(&source.path, &target)
                .map_err(|e| OrganizeError::io("move", &source.path, e))?;
            Applied::MOVED
        };

        tracing::info!(
            source = %self.relative_source(path),
            destination = %self.relative_destination(&target),
            "{}",
            applied.action
        );
        Ok(Some(applied.disposition))
    }

    fn log_failure(&self, err: &OrganizeError) {
        match err {
            OrganizeError::IncompleteMetadata { path } => {
                tracing::warn!(
                    source = %self.relative_source(path),
                    "missing title or author, left in place"
                );
            }
            OrganizeError::ConflictUnresolved {
                source_path,
                destination,
            } => {
                tracing::warn!(
                    source = %self.relative_source(source_path),
                    destination = %self.relative_destination(destination),
                    "destination differs with the same timestamp, left both in place"
                );
            }
            OrganizeError::UnknownFormat { path, tag } => {
                tracing::error!(
                    source = %self.relative_source(path),
                    format = %tag,
                    "unknown format"
                );
            }
            OrganizeError::UnreadableFormat {
                path,
                source: cause,
                ..
            } => {
                tracing::error!(
                    source = %self.relative_source(path),
                    error = %cause,
                    "unreadable file"
                );
            }
            OrganizeError::MoveFailure {
                operation,
                path,
                source: cause,
            } => {
                tracing::error!(
                    path = %path.display(),
                    operation = *operation,
                    error = %cause,
                    "relocation failed"
                );
            }
        }
    }

    fn relative_source<'p>(&self, path: &'p Path) -> Display<'p> {
        path.strip_prefix(self.source_root).unwrap_or(path).display()
    }

    fn relative_destination<'p>(&self, path: &'p Path) -> Display<'p> {
        path.strip_prefix(self.destination_root)
            .unwrap_or(path)
            .display()
    }
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    fs::canonicalize(root).with_context(|| format!("cannot resolve {}", root.display()))
}

/// Organizes `source_root` into `destination_root` using `registry`.
pub fn organize(
    source_root: &Path,
    destination_root: &Path,
    registry: &FormatRegistry,
    extensions: &[String],
) -> Result<OrganizeReport> {
    Organizer::new(source_root, destination_root, registry).organize(extensions)
}
