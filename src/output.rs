//! Output naming and writing for extracted previews.

use std::fs;
use std::path::PathBuf;

use crate::error::{ExtractError, Result};
use crate::lrprev::Identifier;
use crate::state::CatalogRecord;

/// Bucket for previews whose catalog lookup failed
pub const PATH_NOT_FOUND_DIR: &str = "_path_not_found";

/// How extracted previews are named and where they go
#[derive(Debug, Clone, PartialEq)]
pub struct OutputOptions {
    /// Directory everything is written under
    pub root: PathBuf,
    /// Append `_{width}x{height}` to every file name
    pub include_size: bool,
}

impl OutputOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_size: false,
        }
    }

    pub fn with_size(mut self, include_size: bool) -> Self {
        self.include_size = include_size;
        self
    }
}

/// Outcome of looking a preview up in the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLookup {
    /// No catalog was given
    Disabled,
    /// The catalog knows the original file
    Found(CatalogRecord),
    /// A catalog was given but the photo could not be resolved
    NotFound,
}

/// Final location of one extracted preview
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTarget {
    pub directory: PathBuf,
    pub file_name: String,
}

impl OutputTarget {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Write the JPEG, creating missing directories and replacing any
    /// existing file. Returns the path written.
    pub fn write(&self, jpeg: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory)
            .map_err(|e| ExtractError::io("create directory", &self.directory, e))?;

        let path = self.path();
        fs::write(&path, jpeg).map_err(|e| ExtractError::io("write", &path, e))?;

        Ok(path)
    }
}

/// Work out where a preview should be written
pub fn resolve_target(
    options: &OutputOptions,
    identifier: &Identifier,
    lookup: &CatalogLookup,
    (width, height): (u32, u32),
) -> OutputTarget {
    let (directory, base_name) = match lookup {
        CatalogLookup::Found(record) => (
            options.root.join(record.original_path()),
            record.base_name.as_str(),
        ),
        CatalogLookup::NotFound => (options.root.join(PATH_NOT_FOUND_DIR), identifier.as_str()),
        CatalogLookup::Disabled => (options.root.clone(), identifier.as_str()),
    };

    let file_name = if options.include_size {
        format!("{}_{}x{}.jpg", base_name, width, height)
    } else {
        format!("{}.jpg", base_name)
    };

    OutputTarget {
        directory,
        file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lrprev::parse_identifier;
    use tempfile::TempDir;

    const ID: &str = "6B1F2C4E-0F1A-4D6B-9C55-3E2A0D1B7F10";

    fn identifier() -> Identifier {
        parse_identifier(ID).unwrap()
    }

    fn record() -> CatalogRecord {
        CatalogRecord {
            absolute_path: "/Users/me/Pictures/".to_string(),
            path_from_root: "2021/".to_string(),
            base_name: "DSC_0001".to_string(),
        }
    }

    #[test]
    fn test_without_catalog() {
        let options = OutputOptions::new("/out");

        let target = resolve_target(&options, &identifier(), &CatalogLookup::Disabled, (640, 480));

        assert_eq!(target.directory, PathBuf::from("/out"));
        assert_eq!(target.file_name, format!("{}.jpg", ID));
    }

    #[test]
    fn test_catalog_miss_goes_to_bucket() {
        let options = OutputOptions::new("/out");

        let target = resolve_target(&options, &identifier(), &CatalogLookup::NotFound, (640, 480));

        assert_eq!(target.path(), PathBuf::from(format!("/out/_path_not_found/{}.jpg", ID)));
    }

    #[test]
    fn test_catalog_hit_uses_original_location() {
        let options = OutputOptions::new("/out");

        let target = resolve_target(
            &options,
            &identifier(),
            &CatalogLookup::Found(record()),
            (640, 480),
        );

        assert_eq!(target.directory, PathBuf::from("/out/Users/me/Pictures/2021/"));
        assert_eq!(target.file_name, "DSC_0001.jpg");
    }

    #[test]
    fn test_catalog_roots_never_leave_output_root() {
        let dir = TempDir::new().unwrap();
        let options = OutputOptions::new(dir.path());

        for (absolute_path, path_from_root) in [
            ("//nas/photos/", "raw/"),
            ("C:/Users/me/Pictures/", "2021/"),
            ("/photos/", "../../../tmp/"),
        ] {
            let lookup = CatalogLookup::Found(CatalogRecord {
                absolute_path: absolute_path.to_string(),
                path_from_root: path_from_root.to_string(),
                base_name: "DSC_0001".to_string(),
            });

            let target = resolve_target(&options, &identifier(), &lookup, (1, 1));

            assert!(
                target.path().starts_with(dir.path()),
                "{} escaped the output root",
                target.path().display()
            );
            let written = target.write(b"jpeg").unwrap();
            assert!(written.starts_with(dir.path()));
        }
    }

    #[test]
    fn test_size_suffix() {
        let options = OutputOptions::new("/out").with_size(true);

        let plain = resolve_target(&options, &identifier(), &CatalogLookup::Disabled, (2048, 1365));
        let named = resolve_target(
            &options,
            &identifier(),
            &CatalogLookup::Found(record()),
            (2048, 1365),
        );

        assert_eq!(plain.file_name, format!("{}_2048x1365.jpg", ID));
        assert_eq!(named.file_name, "DSC_0001_2048x1365.jpg");
    }

    #[test]
    fn test_write_creates_directories_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let target = OutputTarget {
            directory: dir.path().join("a/b/c"),
            file_name: "photo.jpg".to_string(),
        };

        let written = target.write(b"first").unwrap();
        assert_eq!(written, dir.path().join("a/b/c/photo.jpg"));
        assert_eq!(fs::read(&written).unwrap(), b"first");

        target.write(b"second").unwrap();
        assert_eq!(fs::read(&written).unwrap(), b"second");
    }
}
