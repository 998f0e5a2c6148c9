//! Reconciles a source file with a file already occupying its destination.
//!
//! The decision only looks at sizes and effective modification times. Equal
//! sizes count as duplicate content without comparing bytes, so two different
//! books of the same size are treated as duplicates and the source is removed.

use std::fs;
use std::path::Path;

use crate::error::OrganizeError;
use crate::organizer::Disposition;
use crate::source::{same_file, FileStamp, SourceFile};

/// What to do with a source whose destination is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Same size: remove the source, keep the destination.
    Duplicate,
    /// Destination is newer: remove the source, keep the destination.
    Stale,
    /// Source is newer: move it over the destination.
    Overwrite,
    /// Different sizes, same effective time: touch nothing.
    Conflict,
}

/// Decides how to reconcile `source` with an existing `destination`. First match wins.
pub fn decide(source: &FileStamp, destination: &FileStamp) -> Resolution {
    if source.size == destination.size {
        return Resolution::Duplicate;
    }

    let source_time = source.effective_time();
    let destination_time = destination.effective_time();
    if destination_time > source_time {
        Resolution::Stale
    } else if source_time > destination_time {
        Resolution::Overwrite
    } else {
        Resolution::Conflict
    }
}

/// A resolution that was carried out, with the message logged for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub disposition: Disposition,
    pub action: &'static str,
}

impl Applied {
    /// A plain move into an empty destination.
    pub const MOVED: Applied = Applied {
        disposition: Disposition::Moved,
        action: "moved",
    };
}

/// Resolves `source` against the existing file at `destination` and applies the decision.
///
/// Must only be called when `destination` exists. Returns `Ok(None)` when
/// `destination` is the source file itself, which is then left untouched.
pub fn resolve(source: &SourceFile, destination: &Path) -> Result<Option<Applied>, OrganizeError> {
    if same_file(&source.path, destination)
        .map_err(|e| OrganizeError::io("stat destination", destination, e))?
    {
        return Ok(None);
    }
    let existing = FileStamp::read(destination)
        .map_err(|e| OrganizeError::io("stat destination", destination, e))?;

    let applied = match decide(&source.stamp, &existing) {
        Resolution::Duplicate => {
            remove_source(source)?;
            Applied {
                disposition: Disposition::SkippedDuplicate,
                action: "removed duplicate source",
            }
        }
        Resolution::Stale => {
            remove_source(source)?;
            Applied {
                disposition: Disposition::SkippedStale,
                action: "removed stale source",
            }
        }
        Resolution::Overwrite => {
            fs::rename(&source.path, destination)
                .map_err(|e| OrganizeError::io("overwrite", &source.path, e))?;
            Applied {
                disposition: Disposition::Overwritten,
                action: "overwrote older destination",
            }
        }
        Resolution::Conflict => {
            return Err(OrganizeError::ConflictUnresolved {
                source_path: source.path.clone(),
                destination: destination.to_path_buf(),
            })
        }
    };
    Ok(Some(applied))
}

fn remove_source(source: &SourceFile) -> Result<(), OrganizeError> {
    fs::remove_file(&source.path).map_err(|e| OrganizeError::io("remove source", &source.path, e))
}
