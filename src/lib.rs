//! # divrep
//!
//! Dividend analysis report builder for Rust.
//!
//! This library turns an annotated analysis document into an ordered set of
//! titled sections, assembles them with a fixed financial dataset into a
//! report, and renders the result as Markdown, plain text, or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use divrep::{sectionize_file, Dataset, render};
//!
//! fn main() -> divrep::Result<()> {
//!     // Sectionize the analysis document
//!     let sections = sectionize_file("Analisi_FDJ.txt")?;
//!
//!     // Assemble and render the report
//!     let report = Dataset::builtin().build_report(sections);
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&report, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Citation stripping**: inline `[source: N]` markers removed cleanly
//! - **Heading-based sectioning**: ordered, title-keyed, total over any input
//! - **Multiple output formats**: Markdown, plain text, JSON
//! - **Graceful degradation**: a missing analysis file becomes a placeholder
//!   panel instead of an aborted report

pub mod data;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod sectionize;

// Re-export commonly used types
pub use data::Dataset;
pub use error::{Error, Result};
pub use model::{
    CellValue, DpsPoint, FinancialRow, FinancialTable, LineChart, MetricTile, Report, ReportMeta,
    Section, SectionList, Verdict,
};
pub use render::{JsonFormat, RenderOptions, RenderResult, RenderStats};
pub use sectionize::{
    strip_citations, CitationStripper, SectionizeOptions, Sectionizer, DEFAULT_SECTION_TITLE,
};

use std::path::Path;

/// Sectionize in-memory analysis text.
///
/// Citations are stripped first; the result always contains at least the
/// implicit default-titled section.
///
/// # Example
///
/// ```
/// let sections = divrep::sectionize_str("intro\n## 1. Storico\nDPS cresce.");
/// assert_eq!(sections.len(), 2);
/// ```
pub fn sectionize_str(text: &str) -> SectionList {
    Sectionizer::new().sectionize(text)
}

/// Sectionize in-memory analysis text with custom options.
pub fn sectionize_str_with_options(text: &str, options: SectionizeOptions) -> SectionList {
    Sectionizer::with_options(options).sectionize(text)
}

/// Load and sectionize an analysis document.
///
/// # Errors
///
/// Fails when the file is missing ([`Error::AnalysisNotFound`]) or not valid
/// UTF-8 ([`Error::AnalysisDecode`]); sectionizing itself cannot fail.
pub fn sectionize_file<P: AsRef<Path>>(path: P) -> Result<SectionList> {
    let text = loader::load_analysis(path)?;
    Ok(sectionize_str(&text))
}

/// Load and sectionize an analysis document with custom options.
pub fn sectionize_file_with_options<P: AsRef<Path>>(
    path: P,
    options: SectionizeOptions,
) -> Result<SectionList> {
    let text = loader::load_analysis(path)?;
    Ok(sectionize_str_with_options(&text, options))
}

/// Builder for assembling and rendering dividend reports.
///
/// # Example
///
/// ```no_run
/// use divrep::ReportBuilder;
///
/// let markdown = ReportBuilder::new()
///     .with_expand_keyword("Tasse")
///     .from_file("Analisi_FDJ.txt")?
///     .to_markdown()?;
/// # Ok::<(), divrep::Error>(())
/// ```
pub struct ReportBuilder {
    sectionize_options: SectionizeOptions,
    render_options: RenderOptions,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self {
            sectionize_options: SectionizeOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the implicit first section's title.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.render_options = self.render_options.with_expand_title(title.clone());
        self.sectionize_options = self.sectionize_options.with_default_title(title);
        self
    }

    /// Keep citation annotations in section bodies.
    pub fn keep_citations(mut self) -> Self {
        self.sectionize_options = self.sectionize_options.keep_citations();
        self
    }

    /// Add a keyword that marks matching panels as expanded.
    pub fn with_expand_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_expand_keyword(keyword);
        self
    }

    /// Render blank panels instead of suppressing them.
    pub fn keep_empty_panels(mut self) -> Self {
        self.render_options = self.render_options.with_empty_suppression(false);
        self
    }

    /// Skip the report title block.
    pub fn without_header(mut self) -> Self {
        self.render_options = self.render_options.with_header(false);
        self
    }

    /// Build a report from an analysis document on disk.
    ///
    /// # Errors
    ///
    /// Propagates loader failures; use [`ReportBuilder::from_file_lenient`]
    /// to degrade to a placeholder panel instead.
    pub fn from_file<P: AsRef<Path>>(self, path: P) -> Result<BuiltReport> {
        let text = loader::load_analysis(path)?;
        Ok(self.from_str(&text))
    }

    /// Build a report from an analysis document, substituting a placeholder
    /// body when the document cannot be loaded.
    ///
    /// Returns the load failure, if any, alongside the report so callers can
    /// surface a warning.
    pub fn from_file_lenient<P: AsRef<Path>>(self, path: P) -> (BuiltReport, Option<Error>) {
        let (text, warning) = loader::load_or_placeholder(path);
        (self.from_str(&text), warning)
    }

    /// Build a report from in-memory analysis text.
    pub fn from_str(self, text: &str) -> BuiltReport {
        let sections = Sectionizer::with_options(self.sectionize_options).sectionize(text);
        BuiltReport {
            report: Dataset::builtin().build_report(sections),
            render_options: self.render_options,
        }
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An assembled report ready for rendering.
#[derive(Debug)]
pub struct BuiltReport {
    /// The assembled report
    pub report: Report,
    /// Render options to use
    render_options: RenderOptions,
}

impl BuiltReport {
    /// Render to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.report, &self.render_options)
    }

    /// Render to Markdown with statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.report, &self.render_options)
    }

    /// Render to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.report, &self.render_options)
    }

    /// Render to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Get the report.
    pub fn report(&self) -> &Report {
        &self.report
    }
}
