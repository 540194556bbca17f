//! Sectionizing options.

/// Default title for text preceding the first heading.
pub const DEFAULT_SECTION_TITLE: &str = "Introduzione";

/// Options for sectionizing an analysis document.
#[derive(Debug, Clone)]
pub struct SectionizeOptions {
    /// Title of the implicit first section.
    pub default_title: String,

    /// Strip citation annotations before sectioning.
    pub strip_citations: bool,
}

impl SectionizeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the implicit first section's title.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Keep citation annotations in section bodies.
    pub fn keep_citations(mut self) -> Self {
        self.strip_citations = false;
        self
    }
}

impl Default for SectionizeOptions {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_SECTION_TITLE.to_string(),
            strip_citations: true,
        }
    }
}
