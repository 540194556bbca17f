//! Markdown rendering for dividend reports.

use crate::error::Result;
use crate::model::{FinancialTable, LineChart, MetricTile, Report, ReportMeta};

use super::{walk, RenderOptions, RenderResult, RenderSurface};

/// Convert a report to Markdown.
pub fn to_markdown(report: &Report, options: &RenderOptions) -> Result<String> {
    let mut surface = MarkdownSurface::new();
    walk(report, options, &mut surface);
    Ok(surface.into_output())
}

/// Convert a report to Markdown with statistics.
pub fn to_markdown_with_stats(report: &Report, options: &RenderOptions) -> Result<RenderResult> {
    let mut surface = MarkdownSurface::new();
    let mut stats = walk(report, options, &mut surface);
    let content = surface.into_output();
    stats.count_text(&content);
    Ok(RenderResult::new(content, report.meta.clone(), stats))
}

/// Markdown render surface.
///
/// Collapsible panels are emitted as `<details>`/`<summary>` blocks, the one
/// disclosure structure Markdown itself lacks.
#[derive(Debug, Default)]
pub struct MarkdownSurface {
    out: String,
}

impl MarkdownSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_gap(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            if self.out.ends_with('\n') {
                self.out.push('\n');
            } else {
                self.out.push_str("\n\n");
            }
        }
    }
}

impl RenderSurface for MarkdownSurface {
    fn page_header(&mut self, meta: &ReportMeta) {
        self.out.push_str(&format!(
            "# Analisi Dividendi: {} ({})\n\n",
            meta.company, meta.ticker
        ));
        self.out.push_str(&format!(
            "*Analisi aggiornata al: {}*\n\n",
            meta.as_of.format("%d/%m/%Y")
        ));
    }

    fn section_heading(&mut self, title: &str) {
        self.ensure_gap();
        self.out.push_str(&format!("## {}\n\n", title));
    }

    fn metric_tile(&mut self, tile: &MetricTile) {
        self.out
            .push_str(&format!("- **{}:** {}\n", tile.label, tile.value));
        if let Some(ref help) = tile.help {
            self.out.push_str(&format!("  *{}*\n", help));
        }
    }

    fn line_chart(&mut self, chart: &LineChart) {
        self.ensure_gap();
        self.out.push_str(&format!("**{}**\n\n", chart.title));
        self.out
            .push_str(&format!("| {} | {} |\n", chart.x_label, chart.y_label));
        self.out.push_str("| --- | ---: |\n");
        for point in &chart.points {
            self.out
                .push_str(&format!("| {} | {:.2} |\n", point.fiscal_year, point.dps_eur));
        }
        self.out.push('\n');
    }

    fn table(&mut self, table: &FinancialTable) {
        if table.is_empty() {
            return;
        }
        self.ensure_gap();

        self.out.push_str("| Metrica |");
        for column in &table.columns {
            self.out.push_str(&format!(" {} |", column));
        }
        self.out.push('\n');

        self.out.push_str("| --- |");
        for _ in &table.columns {
            self.out.push_str(" ---: |");
        }
        self.out.push('\n');

        for row in &table.rows {
            self.out.push_str(&format!("| {} |", row.metric));
            for value in &row.values {
                let cell = value.to_string().replace('\n', " ").replace('|', "\\|");
                self.out.push_str(&format!(" {} |", cell));
            }
            self.out.push('\n');
        }
        self.out.push('\n');
    }

    fn collapsible(&mut self, title: &str, body: &str, expanded: bool) {
        self.ensure_gap();
        let tag = if expanded { "<details open>" } else { "<details>" };
        self.out.push_str(tag);
        self.out
            .push_str(&format!("\n<summary><b>{}</b></summary>\n\n", title));
        self.out.push_str(body.trim());
        self.out.push_str("\n\n</details>\n\n");
    }

    fn bullet_list(&mut self, heading: &str, items: &[String]) {
        self.ensure_gap();
        self.out.push_str(&format!("**{}**\n\n", heading));
        for item in items {
            self.out.push_str(&format!("- {}\n", item));
        }
        self.out.push('\n');
    }

    fn paragraph(&mut self, text: &str) {
        self.ensure_gap();
        self.out.push_str(text);
        self.out.push_str("\n\n");
    }

    fn caption(&mut self, text: &str) {
        self.ensure_gap();
        self.out.push_str(&format!("*{}*\n\n", text));
    }

    fn rule(&mut self) {
        self.ensure_gap();
        self.out.push_str("---\n\n");
    }

    fn into_output(self) -> String {
        self.out.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::model::SectionList;

    fn sample_report() -> Report {
        let mut analysis = SectionList::new();
        analysis.insert("Introduzione", "Testo introduttivo.");
        analysis.insert("Rischi", "Tasse 2025.");
        analysis.insert("Vuota", "");
        Dataset::builtin().build_report(analysis)
    }

    #[test]
    fn test_markdown_contains_core_blocks() {
        let md = to_markdown(&sample_report(), &RenderOptions::default()).unwrap();

        assert!(md.starts_with("# Analisi Dividendi: Française des Jeux (FDJ.PA)"));
        assert!(md.contains("## Indicatori Chiave del Dividendo"));
        assert!(md.contains("| Anno Esercizio Fiscale | Dividendo per Azione (€) |"));
        assert!(md.contains("| Ricavi Totali (€M) |"));
        assert!(md.contains("Punti di Forza (Pro-Dividendo)"));
    }

    #[test]
    fn test_markdown_panel_policy() {
        let md = to_markdown(&sample_report(), &RenderOptions::default()).unwrap();

        // Default title opens expanded, others collapsed, blank suppressed.
        assert!(md.contains("<details open>\n<summary><b>Introduzione</b></summary>"));
        assert!(md.contains("<details>\n<summary><b>Rischi</b></summary>"));
        assert!(!md.contains("Vuota"));
    }

    #[test]
    fn test_markdown_without_header() {
        let options = RenderOptions::new().with_header(false);
        let md = to_markdown(&sample_report(), &options).unwrap();
        assert!(md.starts_with("## Indicatori Chiave del Dividendo"));
    }

    #[test]
    fn test_markdown_stats() {
        let result = to_markdown_with_stats(&sample_report(), &RenderOptions::default()).unwrap();

        assert_eq!(result.stats.tile_count, 4);
        assert_eq!(result.stats.chart_point_count, 5);
        assert_eq!(result.stats.table_row_count, 8);
        assert_eq!(result.stats.section_count, 2);
        assert_eq!(result.stats.suppressed_count, 1);
        assert!(result.stats.word_count > 0);
        assert_eq!(result.meta.ticker, "FDJ.PA");
    }
}
