//! Plain text rendering for dividend reports.

use crate::error::Result;
use crate::model::{FinancialTable, LineChart, MetricTile, Report, ReportMeta};

use super::{walk, RenderOptions, RenderSurface};

const HEADING_RULE_WIDTH: usize = 40;
const CHART_BAR_WIDTH: f64 = 30.0;

/// Convert a report to plain text.
pub fn to_text(report: &Report, options: &RenderOptions) -> Result<String> {
    let mut surface = TextSurface::new();
    walk(report, options, &mut surface);
    Ok(surface.into_output())
}

/// Plain-text render surface.
///
/// A static medium has no disclosure widget, so collapsible panels print
/// their default state as a `[-]`/`[+]` marker and always show the body.
#[derive(Debug, Default)]
pub struct TextSurface {
    out: String,
}

impl TextSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for TextSurface {
    fn page_header(&mut self, meta: &ReportMeta) {
        self.out.push_str(&format!(
            "Analisi Dividendi: {} ({})\n",
            meta.company, meta.ticker
        ));
        self.out.push_str(&format!(
            "Analisi aggiornata al: {}\n\n",
            meta.as_of.format("%d/%m/%Y")
        ));
    }

    fn section_heading(&mut self, title: &str) {
        self.out.push_str(&format!(
            "\n{}\n{}\n",
            title,
            "─".repeat(HEADING_RULE_WIDTH)
        ));
    }

    fn metric_tile(&mut self, tile: &MetricTile) {
        self.out
            .push_str(&format!("{}: {}\n", tile.label, tile.value));
        if let Some(ref help) = tile.help {
            self.out.push_str(&format!("    {}\n", help));
        }
    }

    fn line_chart(&mut self, chart: &LineChart) {
        self.out.push_str(&format!("{}\n\n", chart.title));
        let max = chart.max_value().unwrap_or(0.0);
        for point in &chart.points {
            let bar = if max > 0.0 {
                let len = (point.dps_eur / max * CHART_BAR_WIDTH).round() as usize;
                "█".repeat(len)
            } else {
                String::new()
            };
            self.out.push_str(&format!(
                "{}  {:>5.2} │{}\n",
                point.fiscal_year, point.dps_eur, bar
            ));
        }
        self.out.push('\n');
    }

    fn table(&mut self, table: &FinancialTable) {
        if table.is_empty() {
            return;
        }

        // Column widths: metric column plus one per period.
        let mut widths = vec!["Metrica".len()];
        widths.extend(table.columns.iter().map(|c| c.chars().count()));
        for row in &table.rows {
            widths[0] = widths[0].max(row.metric.chars().count());
            for (i, value) in row.values.iter().enumerate() {
                if i + 1 < widths.len() {
                    widths[i + 1] = widths[i + 1].max(value.to_string().chars().count());
                }
            }
        }

        let mut header = format!("{:<width$}", "Metrica", width = widths[0]);
        for (i, column) in table.columns.iter().enumerate() {
            header.push_str(&format!("  {:>width$}", column, width = widths[i + 1]));
        }
        self.out.push_str(&header);
        self.out.push('\n');
        self.out
            .push_str(&"─".repeat(header.chars().count()));
        self.out.push('\n');

        for row in &table.rows {
            self.out
                .push_str(&format!("{:<width$}", row.metric, width = widths[0]));
            for (i, value) in row.values.iter().enumerate() {
                let width = widths.get(i + 1).copied().unwrap_or(0);
                self.out
                    .push_str(&format!("  {:>width$}", value.to_string(), width = width));
            }
            self.out.push('\n');
        }
        self.out.push('\n');
    }

    fn collapsible(&mut self, title: &str, body: &str, expanded: bool) {
        let marker = if expanded { "[-]" } else { "[+]" };
        self.out.push_str(&format!("\n{} {}\n", marker, title));
        for line in body.trim().lines() {
            self.out.push_str(&format!("    {}\n", line));
        }
    }

    fn bullet_list(&mut self, heading: &str, items: &[String]) {
        self.out.push_str(&format!("\n{}\n", heading));
        for item in items {
            self.out.push_str(&format!("  * {}\n", item));
        }
    }

    fn paragraph(&mut self, text: &str) {
        self.out.push_str(&format!("\n{}\n", text));
    }

    fn caption(&mut self, text: &str) {
        self.out.push_str(&format!("{}\n", text));
    }

    fn rule(&mut self) {
        self.out.push('\n');
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
        Dataset::builtin().build_report(analysis)
    }

    #[test]
    fn test_text_output_structure() {
        let text = to_text(&sample_report(), &RenderOptions::default()).unwrap();

        assert!(text.starts_with("Analisi Dividendi: Française des Jeux (FDJ.PA)"));
        assert!(text.contains("Indicatori Chiave del Dividendo"));
        assert!(text.contains("Ultimo DPS Pagato (Esercizio 2023): € 1.78"));
        assert!(text.contains("[-] Introduzione"));
        assert!(text.contains("[+] Rischi"));
        assert!(text.contains("    Tasse 2025."));
    }

    #[test]
    fn test_text_chart_bars_scale() {
        let text = to_text(&sample_report(), &RenderOptions::default()).unwrap();

        // The 2023 point is the maximum: full-width bar.
        let full = "█".repeat(30);
        assert!(text.contains(&format!("2023   1.78 │{}", full)));
        // 0.45 / 1.78 of 30 rounds to 8.
        assert!(text.contains(&format!("2019   0.45 │{}", "█".repeat(8))));
    }

    #[test]
    fn test_text_table_alignment() {
        let text = to_text(&sample_report(), &RenderOptions::default()).unwrap();
        assert!(text.contains("Metrica"));
        assert!(text.contains("Cassa Netta"));
        assert!(text.contains("LTM (31/12/24)"));
    }
}
