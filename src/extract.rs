//! The per-file extraction pipeline and the batch driver around it.
//!
//! One preview is fully processed (read, scan, name lookup, write) before the
//! next one starts. Failures are reported on the console and never stop the
//! batch.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ExtractError, Result};
use crate::lrprev::{
    extract_last_image, identifier_from_path, jpeg_dimensions, Identifier, PREVIEW_EXTENSION,
};
use crate::output::{resolve_target, CatalogLookup, OutputOptions};
use crate::state::Catalog;

/// Everything the pipeline needs to know about a run
#[derive(Debug)]
pub struct ExtractConfig {
    pub output: OutputOptions,
    /// Catalog used to recover original folders and names
    pub catalog: Option<Catalog>,
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Preview files attempted
    pub found: usize,
    /// JPEGs written
    pub written: usize,
    /// Previews skipped because of an error
    pub skipped: usize,
}

/// Extract the last embedded JPEG of one preview file
///
/// Returns the path of the written JPEG.
pub fn extract_preview(lrprev_path: &Path, config: &ExtractConfig) -> Result<PathBuf> {
    if !lrprev_path.is_file() {
        return Err(ExtractError::InputNotFound {
            path: lrprev_path.to_path_buf(),
        });
    }

    let blob = fs::read(lrprev_path).map_err(|e| ExtractError::io("read", lrprev_path, e))?;

    let identifier =
        identifier_from_path(lrprev_path).ok_or_else(|| ExtractError::MissingIdentifier {
            path: lrprev_path.to_path_buf(),
        })?;

    let lookup = lookup_original(config.catalog.as_ref(), &identifier);

    let segment = extract_last_image(&blob).ok_or_else(|| ExtractError::NoJpegMarkers {
        path: lrprev_path.to_path_buf(),
    })?;
    let jpeg = segment.bytes(&blob);

    tracing::debug!(
        start = segment.start,
        end = segment.end,
        "selected embedded JPEG"
    );

    let dimensions = jpeg_dimensions(jpeg)?;

    let target = resolve_target(&config.output, &identifier, &lookup, dimensions);
    let written = target.write(jpeg)?;

    println!("📸 JPEG image extracted and saved to {}", written.display());
    Ok(written)
}

/// Ask the catalog (if any) where this photo came from
///
/// A missing row and a broken catalog both fall back to the not-found
/// bucket, but are reported differently.
fn lookup_original(catalog: Option<&Catalog>, identifier: &Identifier) -> CatalogLookup {
    let Some(catalog) = catalog else {
        return CatalogLookup::Disabled;
    };

    match catalog.resolve(identifier) {
        Ok(Some(record)) => {
            println!(
                "📂 Original file path for UUID {}: {}",
                identifier,
                record.original_path().display()
            );
            CatalogLookup::Found(record)
        }
        Ok(None) => {
            println!("🔍 No entry found for UUID: {}", identifier);
            CatalogLookup::NotFound
        }
        Err(e) => {
            eprintln!("⚠️  {}", e);
            CatalogLookup::NotFound
        }
    }
}

/// Run the pipeline on one file, reporting any failure
fn process_file(lrprev_path: &Path, config: &ExtractConfig, summary: &mut ExtractSummary) {
    summary.found += 1;
    println!("Processing file {}: {}", summary.found, lrprev_path.display());

    match extract_preview(lrprev_path, config) {
        Ok(_) => summary.written += 1,
        Err(e) => {
            eprintln!("⚠️  Skipped {}: {}", lrprev_path.display(), e);
            summary.skipped += 1;
        }
    }
}

/// Recursively extract every `.lrprev` file below a directory
pub fn extract_directory(dir: &Path, config: &ExtractConfig) -> Result<ExtractSummary> {
    if !dir.is_dir() {
        return Err(ExtractError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }

    println!("🔍 Scanning folder: {}", dir.display());

    let mut summary = ExtractSummary::default();

    // Walk the directory tree recursively
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        // Only process files (not directories)
        if !path.is_file() || !is_preview_file(path) {
            continue;
        }

        process_file(path, config, &mut summary);
    }

    Ok(summary)
}

/// Check the extension, ignoring case
fn is_preview_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(PREVIEW_EXTENSION))
        .unwrap_or(false)
}

/// Extract from either a single preview file or a directory of them
pub fn run(input: &Path, config: &ExtractConfig) -> ExtractSummary {
    let mut summary = ExtractSummary::default();

    if input.is_dir() {
        match extract_directory(input, config) {
            Ok(result) => summary = result,
            Err(e) => eprintln!("⚠️  {}", e),
        }
    } else if input.is_file() {
        process_file(input, config, &mut summary);
    } else {
        eprintln!(
            "⚠️  The provided path {} does not exist or is not a directory or file.",
            input.display()
        );
        return summary;
    }

    println!(
        "✅ Extraction complete: {} written, {} skipped",
        summary.written, summary.skipped
    );

    summary
}
