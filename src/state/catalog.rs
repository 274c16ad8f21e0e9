use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};

use super::data::CatalogRecord;
use crate::lrprev::Identifier;

/// Join a photo's global id to its folder and root folder.
const ORIGINAL_PATH_QUERY: &str = "
    SELECT root.absolutePath, folder.pathFromRoot, file.baseName
    FROM AgLibraryFile file
    INNER JOIN AgLibraryFolder folder ON folder.id_local = file.folder
    INNER JOIN AgLibraryRootFolder root ON root.id_local = folder.rootFolder
    WHERE file.id_global = ?1
";

/// Failures talking to the catalog database
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to open catalog {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

/// The Catalog gives read-only access to a Lightroom catalog (`.lrcat`).
///
/// No connection is kept around: every lookup opens the database, runs one
/// query and drops the connection again before returning.
#[derive(Debug)]
pub struct Catalog {
    db_path: PathBuf,
}

impl Catalog {
    /// Point at a catalog file. Nothing is opened until the first lookup.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Catalog {
            db_path: db_path.into(),
        }
    }

    /// Get the path to the catalog file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Open a read-only connection for a single lookup
    fn connect(&self) -> Result<Connection, CatalogError> {
        Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| CatalogError::Open {
            path: self.db_path.clone(),
            source,
        })
    }

    /// Look up where the photo with this global id was imported from.
    ///
    /// Returns `Ok(None)` when the catalog has no such photo. Any problem
    /// opening or querying the database is an error.
    pub fn resolve(&self, identifier: &Identifier) -> Result<Option<CatalogRecord>, CatalogError> {
        let conn = self.connect()?;

        let record = conn
            .query_row(ORIGINAL_PATH_QUERY, [identifier.as_str()], |row| {
                Ok(CatalogRecord {
                    absolute_path: row.get(0)?,
                    path_from_root: row.get(1)?,
                    base_name: row.get(2)?,
                })
            })
            .optional()?;

        tracing::debug!(
            catalog = %self.db_path.display(),
            %identifier,
            found = record.is_some(),
            "catalog lookup"
        );

        Ok(record)
    }
}
