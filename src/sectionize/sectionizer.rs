//! The document sectionizer.

use std::borrow::Cow;

use super::{CitationStripper, HeadingScanner, SectionizeOptions};
use crate::model::SectionList;

/// Partitions an annotated analysis document into titled sections.
///
/// The sectionizer is a pure function of its input text: it holds only
/// compiled patterns and options, never per-invocation state, so a single
/// instance can be reused or shared freely.
#[derive(Debug, Clone)]
pub struct Sectionizer {
    options: SectionizeOptions,
    stripper: CitationStripper,
    scanner: HeadingScanner,
}

impl Sectionizer {
    /// Create a sectionizer with default options.
    pub fn new() -> Self {
        Self::with_options(SectionizeOptions::default())
    }

    /// Create a sectionizer with custom options.
    pub fn with_options(options: SectionizeOptions) -> Self {
        Self {
            options,
            stripper: CitationStripper::new(),
            scanner: HeadingScanner::new(),
        }
    }

    /// The options this sectionizer was built with.
    pub fn options(&self) -> &SectionizeOptions {
        &self.options
    }

    /// Partition `text` into an ordered section list.
    ///
    /// Total over all inputs: the empty string, text with no headings, and
    /// stray `#` characters inside prose all yield a valid (possibly
    /// degenerate) list. Text before the first heading lands in the implicit
    /// default-titled section, which is always first even when blank.
    pub fn sectionize(&self, text: &str) -> SectionList {
        let text: Cow<'_, str> = if self.options.strip_citations {
            self.stripper.strip(text)
        } else {
            Cow::Borrowed(text)
        };

        let mut sections = SectionList::new();
        let mut current = sections.open(&self.options.default_title);
        let mut cursor = 0;

        for heading in self.scanner.scan(&text) {
            sections.append(current, &text[cursor..heading.start]);
            current = sections.open(&heading.title);
            cursor = heading.end;
        }
        sections.append(current, &text[cursor..]);

        sections
    }
}

impl Default for Sectionizer {
    fn default() -> Self {
        Self::new()
    }
}
