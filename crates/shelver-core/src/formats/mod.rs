//! Format registry: maps a file's format tag to the parser that reads its identity.
//!
//! Built-in parsers cover EPUB and MOBI. Lookup is case-insensitive on the
//! tag, so `Book.EPUB` is read by the epub parser.

mod epub;
mod mobi;

use std::collections::HashMap;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::error::OrganizeError;
use crate::identity::Identity;
use crate::source::SourceFile;

pub use self::epub::EpubParser;
pub use self::mobi::MobiParser;

/// Error raised by a format parser. The organizer treats all variants alike.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("EPUB parsing error: {0}")]
    Epub(String),

    #[error("MOBI parsing error: {0}")]
    Mobi(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed file: {0}")]
    Malformed(String),
}

/// Reads title and author from one container format.
pub trait FormatParser: Send + Sync {
    fn read_identity(&self, path: &Path) -> Result<Identity, ParseError>;
}

pub struct FormatRegistry {
    parsers: HashMap<String, Box<dyn FormatParser>>,
}

impl FormatRegistry {
    /// Registry with no parsers; every file is an unknown format.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Registers `parser` for `tag`, replacing any parser already registered for it.
    pub fn register(&mut self, tag: &str, parser: impl FormatParser + 'static) {
        self.parsers.insert(tag.to_ascii_lowercase(), Box::new(parser));
    }

    pub fn supports(&self, tag: &str) -> bool {
        self.parsers.contains_key(&tag.to_ascii_lowercase())
    }

    /// Extracts the identity of `file` with the parser registered for its format.
    pub fn extract(&self, file: &SourceFile) -> Result<Identity, OrganizeError> {
        let parser = self
            .parsers
            .get(&file.format.to_ascii_lowercase())
            .ok_or_else(|| OrganizeError::UnknownFormat {
                path: file.path.clone(),
                tag: file.format.clone(),
            })?;

        parser
            .read_identity(&file.path)
            .map_err(|source| OrganizeError::UnreadableFormat {
                path: file.path.clone(),
                tag: file.format.clone(),
                source,
            })
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("epub", EpubParser);
        registry.register("mobi", MobiParser);
        registry
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("FormatRegistry").field("tags", &tags).finish()
    }
}
