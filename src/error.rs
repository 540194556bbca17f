//! Error types for the divrep library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for divrep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering a report.
///
/// The sectionizer itself is total and never produces an error; the variants
/// here belong to the surrounding resource loading and rendering layers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The analysis document does not exist at the given path.
    #[error("analysis document not found: {}", .path.display())]
    AnalysisNotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The analysis document exists but its bytes are not valid UTF-8.
    #[error("analysis document {} is not valid UTF-8: {source}", .path.display())]
    AnalysisDecode {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying decode failure.
        source: std::str::Utf8Error,
    },

    /// Error during rendering (Markdown, text, JSON).
    #[error("rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True when the error means the analysis resource is missing, as
    /// opposed to present but unreadable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::AnalysisNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::AnalysisNotFound {
            path: PathBuf::from("Analisi_FDJ.txt"),
        };
        assert_eq!(
            err.to_string(),
            "analysis document not found: Analisi_FDJ.txt"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_not_found());
    }
}
