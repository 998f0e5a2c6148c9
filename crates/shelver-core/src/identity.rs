//! Bibliographic identity extracted from an ebook's internal metadata.

/// Title and author as read from a file, normalized on construction.
///
/// Values are trimmed; a value that is empty after trimming is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Identity {
    pub fn new(title: Option<String>, author: Option<String>) -> Self {
        Self {
            title: normalize(title),
            author: normalize(author),
        }
    }

    /// Returns `(title, author)` when both are present.
    pub fn complete(&self) -> Option<(&str, &str)> {
        Some((self.title.as_deref()?, self.author.as_deref()?))
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_values() {
        let id = Identity::new(
            Some("  The Magykal Papers ".to_string()),
            Some("Angie Sage".to_string()),
        );
        assert_eq!(id.complete(), Some(("The Magykal Papers", "Angie Sage")));
    }

    #[test]
    fn blank_values_are_absent() {
        let id = Identity::new(Some("Title".to_string()), Some(" \t ".to_string()));
        assert_eq!(id.author, None);
        assert_eq!(id.complete(), None);

        let id = Identity::new(None, Some("Author".to_string()));
        assert_eq!(id.complete(), None);
        assert_eq!(Identity::default().complete(), None);
    }
}
