/// Lightroom preview cache (`.lrprev`) handling
///
/// This module handles:
/// - Locating the last embedded JPEG inside a preview blob (preview.rs)
/// - Probing the extracted JPEG for its dimensions (preview.rs)
/// - Recovering the catalog identifier from a preview file name (identifier.rs)

pub mod identifier;
pub mod preview;

pub use identifier::{identifier_from_path, parse_identifier, Identifier};
pub use preview::{extract_last_image, jpeg_dimensions, ImageSegment};

/// File extension used by Lightroom preview cache files
pub const PREVIEW_EXTENSION: &str = "lrprev";
