//! MOBI identity: the header title and the EXTH author record.

use std::fs;
use std::path::Path;

use ::mobi::Mobi;

use super::{FormatParser, ParseError};
use crate::identity::Identity;

#[derive(Debug, Clone, Copy, Default)]
pub struct MobiParser;

impl FormatParser for MobiParser {
    fn read_identity(&self, path: &Path) -> Result<Identity, ParseError> {
        let bytes = fs::read(path)?;
        let book = Mobi::new(bytes).map_err(|e| ParseError::Mobi(e.to_string()))?;
        Ok(Identity::new(Some(book.title()), book.author()))
    }
}
