/// Embedded JPEG extraction from preview blobs
/// A preview file stores several renditions of the same photo back to back;
/// the last one is the largest, so we cut from the last SOI to the last EOI.
use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::error::{ExtractError, Result};

/// JPEG Start Of Image (SOI)
const JPEG_START: [u8; 2] = [0xFF, 0xD8];
/// JPEG End Of Image (EOI)
const JPEG_END: [u8; 2] = [0xFF, 0xD9];

/// Byte range `[start, end)` of one embedded JPEG inside a preview blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSegment {
    /// Offset of the SOI marker
    pub start: usize,
    /// Offset just past the EOI marker
    pub end: usize,
}

impl ImageSegment {
    /// Borrow the segment's bytes out of the blob it was found in.
    ///
    /// Markers are picked independently, so a malformed blob can put the last
    /// SOI after the last EOI. Such a segment is empty rather than a panic.
    pub fn bytes<'a>(&self, blob: &'a [u8]) -> &'a [u8] {
        blob.get(self.start..self.end).unwrap_or(&[])
    }

    /// Number of bytes covered (0 for an inverted range)
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Find the last embedded JPEG in a preview blob
///
/// Returns `None` when the blob has no SOI marker or no EOI marker.
/// The start is the last SOI and the end is the end of the last EOI; the two
/// are chosen independently and their order is not checked.
pub fn extract_last_image(blob: &[u8]) -> Option<ImageSegment> {
    let mut last_start = None;
    let mut last_end = None;
    let mut start_count = 0usize;
    let mut end_count = 0usize;

    for (i, window) in blob.windows(2).enumerate() {
        if window == JPEG_START {
            last_start = Some(i);
            start_count += 1;
        } else if window == JPEG_END {
            last_end = Some(i + JPEG_END.len());
            end_count += 1;
        }
    }

    tracing::debug!(start_count, end_count, "scanned preview blob for JPEG markers");

    let segment = ImageSegment {
        start: last_start?,
        end: last_end?,
    };

    if segment.start >= segment.end {
        tracing::warn!(
            start = segment.start,
            end = segment.end,
            "last SOI marker comes after last EOI marker"
        );
    }

    Some(segment)
}

/// Read the width and height of an extracted JPEG
///
/// Only the frame header is parsed, the scan data is never decoded.
/// A zero width or height counts as a failure.
pub fn jpeg_dimensions(jpeg: &[u8]) -> Result<(u32, u32)> {
    let (width, height) =
        ImageReader::with_format(Cursor::new(jpeg), ImageFormat::Jpeg).into_dimensions()?;

    if width == 0 || height == 0 {
        return Err(ExtractError::EmptyFrame { width, height });
    }

    Ok((width, height))
}
