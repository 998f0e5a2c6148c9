//! Per-file error taxonomy.
//!
//! Every variant is recoverable: the organizer logs it, records the matching
//! [`Disposition`] and moves on to the next file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::formats::ParseError;
use crate::organizer::Disposition;

#[derive(Debug, Error)]
pub enum OrganizeError {
    /// No parser is registered for the file's suffix.
    #[error("unknown format {tag:?}: {}", path.display())]
    UnknownFormat { path: PathBuf, tag: String },

    /// A parser is registered but could not read the file.
    #[error("unreadable {tag} file: {}", path.display())]
    UnreadableFormat {
        path: PathBuf,
        tag: String,
        #[source]
        source: ParseError,
    },

    /// Title or author is missing, blank, or sanitizes to nothing.
    #[error("missing title or author: {}", path.display())]
    IncompleteMetadata { path: PathBuf },

    /// Destination is occupied by a different file and neither side is newer.
    #[error("conflict unresolved: {} vs {}", source_path.display(), destination.display())]
    ConflictUnresolved {
        source_path: PathBuf,
        destination: PathBuf,
    },

    /// OS-level failure while relocating the file.
    #[error("{operation} failed: {}", path.display())]
    MoveFailure {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OrganizeError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        OrganizeError::MoveFailure {
            operation,
            path: path.into(),
            source,
        }
    }

    /// The terminal disposition recorded for a file that failed with this error.
    pub fn disposition(&self) -> Disposition {
        match self {
            OrganizeError::UnknownFormat { .. } => Disposition::SkippedUnknownFormat,
            OrganizeError::UnreadableFormat { .. } => Disposition::SkippedUnreadable,
            OrganizeError::IncompleteMetadata { .. } => Disposition::SkippedIncompleteMetadata,
            OrganizeError::ConflictUnresolved { .. } => Disposition::SkippedConflict,
            OrganizeError::MoveFailure { .. } => Disposition::Failed,
        }
    }
}
