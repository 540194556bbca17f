//! Rendering module for converting reports to various output formats.

mod json;
mod markdown;
mod options;
mod result;
mod surface;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownSurface};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use surface::RenderSurface;
pub use text::{to_text, TextSurface};

use crate::model::Report;

const HEADING_INDICATORS: &str = "Indicatori Chiave del Dividendo";
const HEADING_DPS_HISTORY: &str = "Crescita Storica del Dividendo per Azione (DPS)";
const HEADING_FINANCIALS: &str = "Tabella Finanziaria Riassuntiva";
const HEADING_ANALYSIS: &str = "Analisi Dettagliata";
const HEADING_VERDICT: &str = "Conclusioni per l'Investitore Orientato ai Dividendi";
const CAPTION_DPS: &str = "Nota la forte crescita del dividendo post-IPO.";
const VERDICT_STRENGTHS: &str = "Punti di Forza (Pro-Dividendo)";
const VERDICT_RISKS: &str = "Rischi e Considerazioni (Contro-Dividendo)";
const DISCLAIMER: &str =
    "Disclaimer: analisi basata sui dati forniti. Non costituisce consulenza finanziaria.";

/// Drive a surface through the whole report, in display order.
///
/// Blank analysis panels are suppressed when the options say so; they stay in
/// the model but produce no output.
fn walk<S: RenderSurface>(report: &Report, options: &RenderOptions, surface: &mut S) -> RenderStats {
    let mut stats = RenderStats::new();

    if options.include_header {
        surface.page_header(&report.meta);
        surface.rule();
    }

    surface.section_heading(HEADING_INDICATORS);
    for tile in &report.tiles {
        stats.add_tile();
        surface.metric_tile(tile);
    }
    surface.rule();

    surface.section_heading(HEADING_DPS_HISTORY);
    stats.chart_point_count += report.dps_chart.points.len() as u32;
    surface.line_chart(&report.dps_chart);
    surface.caption(CAPTION_DPS);
    surface.rule();

    surface.section_heading(HEADING_FINANCIALS);
    stats.table_row_count += report.financials.rows.len() as u32;
    surface.table(&report.financials);
    surface.caption(&report.meta.source_note);
    surface.rule();

    surface.section_heading(HEADING_ANALYSIS);
    for section in &report.analysis {
        if options.suppress_empty && section.is_blank() {
            stats.add_suppressed();
            continue;
        }
        stats.add_section();
        surface.collapsible(
            &section.title,
            &section.body,
            options.is_expanded(&section.title),
        );
    }
    surface.rule();

    surface.section_heading(HEADING_VERDICT);
    surface.bullet_list(VERDICT_STRENGTHS, &report.verdict.strengths);
    surface.bullet_list(VERDICT_RISKS, &report.verdict.risks);
    surface.paragraph(&report.verdict.summary);
    surface.rule();
    surface.caption(DISCLAIMER);

    stats
}
