//! Document sectionizing: citation stripping and heading-based partitioning.

mod citations;
mod heading;
mod options;
mod sectionizer;

pub use citations::{strip_citations, CitationStripper};
pub use heading::{HeadingMatch, HeadingScanner};
pub use options::{SectionizeOptions, DEFAULT_SECTION_TITLE};
pub use sectionizer::Sectionizer;
