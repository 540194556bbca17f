//! Presentation capability interface.
//!
//! A [`RenderSurface`] is one rendering technology's implementation of the
//! report's presentation needs: metric tiles, a line chart over ordered
//! points, a data table, and titled collapsible text blocks. The report
//! walker drives any surface through the same sequence of calls, keeping the
//! sectionizer and the static-data modules independent of output format.

use crate::model::{FinancialTable, LineChart, MetricTile, ReportMeta};

/// One output format's presentation capabilities.
pub trait RenderSurface {
    /// Render the report title block.
    fn page_header(&mut self, meta: &ReportMeta);

    /// Render a top-level section heading.
    fn section_heading(&mut self, title: &str);

    /// Render a labeled metric tile.
    fn metric_tile(&mut self, tile: &MetricTile);

    /// Render a line chart from ordered (x, y) pairs.
    fn line_chart(&mut self, chart: &LineChart);

    /// Render a data table.
    fn table(&mut self, table: &FinancialTable);

    /// Render a titled collapsible text block.
    ///
    /// `expanded` is the default disclosure state; static formats may render
    /// it as an annotation.
    fn collapsible(&mut self, title: &str, body: &str, expanded: bool);

    /// Render a subheaded bullet list.
    fn bullet_list(&mut self, heading: &str, items: &[String]);

    /// Render a plain paragraph.
    fn paragraph(&mut self, text: &str);

    /// Render a caption or source note.
    fn caption(&mut self, text: &str);

    /// Render a horizontal separator.
    fn rule(&mut self);

    /// Consume the surface and return the rendered output.
    fn into_output(self) -> String
    where
        Self: Sized;
}
