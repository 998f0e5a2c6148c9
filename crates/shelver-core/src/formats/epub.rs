//! EPUB identity: Dublin Core `title` and first `creator` from the package document.

use std::path::Path;

use ::epub::doc::EpubDoc;

use super::{FormatParser, ParseError};
use crate::identity::Identity;

#[derive(Debug, Clone, Copy, Default)]
pub struct EpubParser;

impl FormatParser for EpubParser {
    fn read_identity(&self, path: &Path) -> Result<Identity, ParseError> {
        let doc = EpubDoc::new(path)
            .map_err(|e| ParseError::Epub(format!("failed to open EPUB: {e}")))?;

        let title = doc.mdata("title").map(|m| m.value.clone());
        let author = doc.mdata("creator").map(|m| m.value.clone());
        Ok(Identity::new(title, author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_zip_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.epub");
        std::fs::write(&path, b"this is not a zip archive").unwrap();
        assert!(matches!(
            EpubParser.read_identity(&path),
            Err(ParseError::Epub(_))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(EpubParser
            .read_identity(&dir.path().join("absent.epub"))
            .is_err());
    }
}
