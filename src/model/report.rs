//! Report-level types.

use super::SectionList;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An assembled dividend report: fixed figures plus the sectionized analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Company identity and as-of date.
    pub meta: ReportMeta,

    /// Key dividend indicator tiles.
    pub tiles: Vec<MetricTile>,

    /// Historical dividend-per-share chart.
    pub dps_chart: LineChart,

    /// Summary financial table.
    pub financials: FinancialTable,

    /// Sectionized analysis document.
    pub analysis: SectionList,

    /// Investor-oriented conclusions.
    pub verdict: Verdict,
}

impl Report {
    /// Number of analysis sections that will actually render
    /// (blank-bodied panels are suppressed by presentation layers).
    pub fn visible_section_count(&self) -> usize {
        self.analysis.non_blank_count()
    }
}

/// Report identity metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Company display name.
    pub company: String,

    /// Exchange ticker.
    pub ticker: String,

    /// Date the underlying analysis was written.
    pub as_of: NaiveDate,

    /// Source note shown under the report title.
    pub source_note: String,
}

/// A labeled metric tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricTile {
    /// Tile label.
    pub label: String,

    /// Formatted value.
    pub value: String,

    /// Optional help text shown alongside the tile.
    pub help: Option<String>,
}

impl MetricTile {
    /// Create a tile without help text.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            help: None,
        }
    }

    /// Attach help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// One (fiscal year, dividend per share) observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DpsPoint {
    /// Fiscal year the dividend relates to.
    pub fiscal_year: u16,

    /// Dividend per share in euros.
    pub dps_eur: f64,
}

/// An ordered series of (x, y) pairs for line-chart rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineChart {
    /// Chart title.
    pub title: String,

    /// X-axis label.
    pub x_label: String,

    /// Y-axis label.
    pub y_label: String,

    /// Points in ascending x order.
    pub points: Vec<DpsPoint>,
}

impl LineChart {
    /// Largest y value in the series, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.dps_eur)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}

/// A table cell holding either a number or a free-text note.
///
/// The summary table mixes figures with annotations such as "Cassa Netta",
/// so cells cannot be plain floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell.
    Number(f64),
    /// Free-text cell.
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{:.1}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// One metric row in the summary financial table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialRow {
    /// Metric name (first column).
    pub metric: String,

    /// One value per period column.
    pub values: Vec<CellValue>,
}

/// Summary financial table with one column per reporting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialTable {
    /// Period column labels.
    pub columns: Vec<String>,

    /// Metric rows.
    pub rows: Vec<FinancialRow>,
}

impl FinancialTable {
    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total column count including the leading metric column.
    pub fn column_count(&self) -> usize {
        self.columns.len() + 1
    }
}

/// Investor-oriented conclusions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Points in favor of the dividend case.
    pub strengths: Vec<String>,

    /// Risks and caveats.
    pub risks: Vec<String>,

    /// Closing summary paragraph.
    pub summary: String,
}
