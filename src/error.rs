//! Errors raised while extracting a single preview file.
//!
//! Every variant is recoverable: the batch driver reports it and moves on to
//! the next file. Only command-line usage errors stop a run, and those are
//! handled by clap before any of this code runs.

use std::path::PathBuf;

/// Why a preview file was skipped
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("The file {} does not exist.", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("UUID could not be extracted from the filename: {}", .path.display())]
    MissingIdentifier { path: PathBuf },

    #[error("No embedded JPEG found in: {}", .path.display())]
    NoJpegMarkers { path: PathBuf },

    #[error("Error processing JPEG image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Extracted JPEG has an empty {width}x{height} frame")]
    EmptyFrame { width: u32, height: u32 },

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Wrap an I/O failure with the path and the operation that failed
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_file() {
        let err = ExtractError::MissingIdentifier {
            path: PathBuf::from("/previews/thumb.lrprev"),
        };
        assert!(err.to_string().contains("/previews/thumb.lrprev"));

        let err = ExtractError::io(
            "write",
            "/out/a.jpg",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.starts_with("Failed to write /out/a.jpg"));
        assert!(message.contains("denied"));
    }
}
