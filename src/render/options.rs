//! Rendering options and configuration.

use crate::sectionize::DEFAULT_SECTION_TITLE;

/// Options for rendering a report.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include the report title block.
    pub include_header: bool,

    /// Skip analysis panels whose body is blank.
    pub suppress_empty: bool,

    /// Titles whose panels open expanded by default (exact match).
    pub expand_titles: Vec<String>,

    /// Substrings that mark a panel title as expanded by default.
    pub expand_keywords: Vec<String>,

    /// Collect render statistics.
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the report title block.
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Enable or disable suppression of blank panels.
    pub fn with_empty_suppression(mut self, suppress: bool) -> Self {
        self.suppress_empty = suppress;
        self
    }

    /// Add an exact title that opens expanded.
    pub fn with_expand_title(mut self, title: impl Into<String>) -> Self {
        self.expand_titles.push(title.into());
        self
    }

    /// Add a keyword that marks matching titles as expanded.
    pub fn with_expand_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.expand_keywords.push(keyword.into());
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Default disclosure state for a panel with this title.
    pub fn is_expanded(&self, title: &str) -> bool {
        self.expand_titles.iter().any(|t| t == title)
            || self.expand_keywords.iter().any(|k| title.contains(k))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            suppress_empty: true,
            expand_titles: vec![DEFAULT_SECTION_TITLE.to_string()],
            expand_keywords: vec!["Dividendi storici".to_string()],
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expansion_policy() {
        let options = RenderOptions::default();
        assert!(options.is_expanded("Introduzione"));
        assert!(options.is_expanded("2. Dividendi storici e crescita"));
        assert!(!options.is_expanded("Rischi"));
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_header(false)
            .with_empty_suppression(false)
            .with_expand_keyword("Tasse");

        assert!(!options.include_header);
        assert!(!options.suppress_empty);
        assert!(options.is_expanded("Nuove Tasse 2025"));
    }
}
