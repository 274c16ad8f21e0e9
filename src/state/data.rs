/// Shared data structures for catalog lookups
///
/// These structs represent the data that flows between
/// the catalog layer and the output layer.
use std::path::{Component, Path, PathBuf};

/// Where a photo lives according to the Lightroom catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    /// Root folder as stored in the catalog (e.g., "/Users/me/Pictures/")
    pub absolute_path: String,
    /// Folder below the root (e.g., "2021/2021-06-12/")
    pub path_from_root: String,
    /// Filename without extension (e.g., "DSC_0001")
    pub base_name: String,
}

impl CatalogRecord {
    /// Original folder of the photo as a relative path
    ///
    /// The root and the folder path are concatenated as stored, then only
    /// the plain name components are kept. Drive prefixes, root separators
    /// and `..` are dropped so the result always stays below whatever
    /// directory it is joined onto.
    pub fn original_path(&self) -> PathBuf {
        let joined = format!("{}{}", self.absolute_path, self.path_from_root);
        Path::new(&joined)
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name),
                _ => None,
            })
            .collect()
    }
}
