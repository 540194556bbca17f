//! Inline citation stripping.
//!
//! Analysis documents carry bracketed source markers such as `[source: 4]`
//! or `[source: 180, 181]`. They carry no display content and are removed
//! before sectioning, together with the whitespace run that precedes them so
//! removal leaves no dangling gap.

use regex::Regex;
use std::borrow::Cow;

/// Pattern for a citation annotation.
///
/// Leading whitespace, then `[source:`, at least one digit, then anything up
/// to the first `]` on the same line. The trailing span excludes `]` and
/// newlines, so a marker never matches across lines or past an unrelated
/// later bracket; a marker with no closing `]` is left untouched.
const CITATION_PATTERN: &str = r"\s*\[source:\s*\d+[^\]\n]*\]";

/// Removes citation annotations from analysis text.
#[derive(Debug, Clone)]
pub struct CitationStripper {
    pattern: Regex,
}

impl CitationStripper {
    /// Create a stripper with the standard citation pattern.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(CITATION_PATTERN).expect("citation pattern is valid"),
        }
    }

    /// Remove every citation annotation from `text`.
    ///
    /// Returns the input unchanged (borrowed) when no annotation is present.
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, "")
    }

    /// Count the annotations present in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

impl Default for CitationStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove every citation annotation from `text`.
///
/// Convenience wrapper over [`CitationStripper`].
pub fn strip_citations(text: &str) -> String {
    CitationStripper::new().strip(text).into_owned()
}
