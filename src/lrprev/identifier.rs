/// Catalog identifiers embedded in preview file names
///
/// Lightroom names each preview after the global id of the photo it belongs
/// to, e.g. `6B1F2C4E-0F1A-4D6B-9C55-3E2A0D1B7F10-1d2a9f0c8b.lrprev`.
use std::fmt;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(
        r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}"
    )
    .unwrap();
}

/// A 36-character 8-4-4-4-12 hex token, case preserved as found
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Find the first identifier token in a file name
pub fn parse_identifier(file_name: &str) -> Option<Identifier> {
    IDENTIFIER_PATTERN
        .find(file_name)
        .map(|m| Identifier(m.as_str().to_string()))
}

/// Find the identifier in the final component of a path
///
/// Parent directories are ignored, only the file name is searched.
pub fn identifier_from_path(path: &Path) -> Option<Identifier> {
    let file_name = path.file_name()?.to_string_lossy();
    parse_identifier(&file_name)
}
