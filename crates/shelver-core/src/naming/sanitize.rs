//! Path component sanitization for the most restrictive supported filesystem (FAT/exFAT).

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

/// Maximum length of a sanitized component, in characters.
pub const MAX_COMPONENT_LEN: usize = 100;

/// Characters that FAT/NTFS reject in a name, with their readable replacement.
const RESERVED: [(char, &str); 9] = [
    ('/', "slash"),
    ('\\', "backslash"),
    (':', "-"),
    ('*', "star"),
    ('?', ""),
    ('"', "'"),
    ('<', "("),
    ('>', ")"),
    ('|', "-"),
];

static SUBSTITUTIONS: LazyLock<HashMap<char, String>> = LazyLock::new(build_substitutions);

fn build_substitutions() -> HashMap<char, String> {
    let mut table: HashMap<char, String> = RESERVED
        .iter()
        .map(|&(c, token)| (c, token.to_string()))
        .collect();

    for byte in (0u8..0x20).chain(std::iter::once(0x7f)) {
        let token = match byte {
            // NUL, LF, CR, SI
            0x00 | 0x0a | 0x0d | 0x0f => String::new(),
            _ => format!("%{byte:02X}"),
        };
        table.insert(char::from(byte), token);
    }

    table
}

/// A single path segment that is safe to create on the target filesystem.
///
/// Only [`sanitize`] constructs one, so holding a value means the string has
/// no reserved or control characters and is at most [`MAX_COMPONENT_LEN`]
/// characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SanitizedComponent(String);

impl SanitizedComponent {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for SanitizedComponent {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Sanitizes a title or author for use as a directory or file stem.
///
/// - Replaces reserved characters with readable tokens (`/` → `slash`, `:` → `-`, ...)
/// - Drops NUL, CR, LF and SI; escapes other control characters as `%XX`
/// - Truncates to [`MAX_COMPONENT_LEN`] characters
/// - Returns an empty component when only dots remain (`.`, `..`)
///
/// Truncation does not keep distinct inputs distinct: two long titles that
/// share a prefix map to the same component.
pub fn sanitize(raw: &str) -> SanitizedComponent {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match SUBSTITUTIONS.get(&c) {
            Some(token) => out.push_str(token),
            None => out.push(c),
        }
    }

    let truncated: String = out.chars().take(MAX_COMPONENT_LEN).collect();
    if truncated.chars().all(|c| c == '.') {
        return SanitizedComponent(String::new());
    }
    SanitizedComponent(truncated)
}
