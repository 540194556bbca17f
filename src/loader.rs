//! Analysis document loading.
//!
//! The sectionizer operates on in-memory text; this module owns the file
//! boundary, including the distinction between a missing document and one
//! that is present but undecodable.

use log::warn;
use std::fs;
use std::io;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Placeholder body substituted when the analysis document cannot be loaded.
pub const PLACEHOLDER_BODY: &str = "Contenuto dell'analisi non disponibile.";

/// Load the analysis document at `path`.
///
/// Decoded text is NFC-normalized so that composed and decomposed accents
/// compare equal in section titles.
///
/// # Errors
/// - [`Error::AnalysisNotFound`] when no file exists at `path`.
/// - [`Error::AnalysisDecode`] when the file is not valid UTF-8.
/// - [`Error::Io`] for any other read failure.
pub fn load_analysis<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::AnalysisNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text.nfc().collect()),
        Err(e) => Err(Error::AnalysisDecode {
            path: path.to_path_buf(),
            source: e.utf8_error(),
        }),
    }
}

/// Load the analysis document, degrading to [`PLACEHOLDER_BODY`] on failure.
///
/// The failure is logged and returned alongside the placeholder so callers
/// can surface a warning without aborting the rest of the report.
pub fn load_or_placeholder<P: AsRef<Path>>(path: P) -> (String, Option<Error>) {
    match load_analysis(path) {
        Ok(text) => (text, None),
        Err(e) => {
            warn!("falling back to placeholder analysis body: {}", e);
            (PLACEHOLDER_BODY.to_string(), Some(e))
        }
    }
}
