//! Data model for dividend reports.
//!
//! This module defines the intermediate representation that bridges the
//! sectionizer and the rendering surfaces. The model is presentation-agnostic
//! and fully serde-serializable.

mod report;
mod section;

pub use report::{
    CellValue, DpsPoint, FinancialRow, FinancialTable, LineChart, MetricTile, Report, ReportMeta,
    Verdict,
};
pub use section::{Section, SectionList};
