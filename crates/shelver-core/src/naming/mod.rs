//! Destination naming.
//!
//! Turns an [`Identity`] into `<root>/<author>/<title>.<ext>`, with author and
//! title sanitized for FAT-class filesystems.

mod sanitize;

use std::path::{Path, PathBuf};

use crate::identity::Identity;

pub use sanitize::{sanitize, SanitizedComponent, MAX_COMPONENT_LEN};

/// Where a file belongs in the destination tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// `<root>/<sanitized author>`
    pub directory: PathBuf,
    /// `<sanitized title>.<original extension>`
    pub file_name: String,
}

impl Destination {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Derives the destination for a file with `identity` and `extension` under `root`.
///
/// Returns `None` when the identity is incomplete or either component
/// sanitizes to an empty string. The extension is appended verbatim.
///
/// # Examples
///
/// - ("The Magykal Papers", "Angie Sage", "epub") → `root/Angie Sage/The Magykal Papers.epub`
/// - ("AC/DC", "Someone", "MOBI") → `root/Someone/ACslashDC.MOBI`
pub fn destination_for(root: &Path, identity: &Identity, extension: &str) -> Option<Destination> {
    let (title, author) = identity.complete()?;

    let author = sanitize(author);
    let stem = sanitize(title);
    if author.is_empty() || stem.is_empty() {
        return None;
    }

    let file_name = if extension.is_empty() {
        stem.into_string()
    } else {
        format!("{stem}.{extension}")
    };

    Some(Destination {
        directory: root.join(author),
        file_name,
    })
}
