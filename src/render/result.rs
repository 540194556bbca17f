//! Rendering result with metadata and statistics.

use crate::model::ReportMeta;
use serde::{Deserialize, Serialize};

/// Result of rendering a report, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Report metadata (copied from the source report)
    pub meta: ReportMeta,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, meta: ReportMeta, stats: RenderStats) -> Self {
        Self {
            content,
            meta,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Analysis panels rendered.
    pub section_count: u32,

    /// Blank analysis panels suppressed.
    pub suppressed_count: u32,

    /// Metric tiles rendered.
    pub tile_count: u32,

    /// Chart points rendered.
    pub chart_point_count: u32,

    /// Financial table rows rendered.
    pub table_row_count: u32,

    /// Approximate word count of the output.
    pub word_count: u32,

    /// Non-whitespace character count of the output.
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendered analysis panel.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Record a suppressed blank panel.
    pub fn add_suppressed(&mut self) {
        self.suppressed_count += 1;
    }

    /// Record a rendered tile.
    pub fn add_tile(&mut self) {
        self.tile_count += 1;
    }

    /// Add word and character counts from rendered text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("DPS atteso € 2.05 (+15%)");

        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.char_count, 20);
    }

    #[test]
    fn test_counters() {
        let mut stats = RenderStats::new();
        stats.add_section();
        stats.add_section();
        stats.add_suppressed();
        stats.add_tile();

        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.suppressed_count, 1);
        assert_eq!(stats.tile_count, 1);
    }
}
