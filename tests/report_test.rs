//! Integration tests for report assembly and rendering.

use std::fs;

use divrep::{render, Dataset, Error, JsonFormat, Report, ReportBuilder};

const SAMPLE_ANALYSIS: &str = "\
Panoramica del titolo [source: 1].
## 1. Dividendi storici
DPS da €0.45 a €1.78 [source: 4, 5].
## 2. Rischi
Nuove tasse dal 2025 [source: 180].
## 3. Conclusioni
";

fn sample_report() -> Report {
    ReportBuilder::new().from_str(SAMPLE_ANALYSIS).report.clone()
}

#[test]
fn test_report_assembly() {
    let report = sample_report();

    assert_eq!(report.meta.company, "Française des Jeux");
    assert_eq!(report.tiles.len(), 4);
    assert_eq!(report.dps_chart.points.len(), 5);
    assert_eq!(report.financials.rows.len(), 8);
    assert_eq!(report.analysis.len(), 4);
    // The trailing empty "Conclusioni" section stays in the model.
    assert_eq!(report.visible_section_count(), 3);
}

#[test]
fn test_markdown_render_policy() {
    let report = sample_report();
    let md = render::to_markdown(&report, &render::RenderOptions::default()).unwrap();

    // Citations never reach the output.
    assert!(!md.contains("[source:"));
    // Default title expanded; keyword-matched title expanded; others collapsed.
    assert!(md.contains("<details open>\n<summary><b>Introduzione</b></summary>"));
    assert!(md.contains("<details open>\n<summary><b>Dividendi storici</b></summary>"));
    assert!(md.contains("<details>\n<summary><b>Rischi</b></summary>"));
    // Blank panel suppressed.
    assert!(!md.contains("<summary><b>Conclusioni</b></summary>"));
}

#[test]
fn test_text_render_contains_dataset_figures() {
    let report = sample_report();
    let text = render::to_text(&report, &render::RenderOptions::default()).unwrap();

    assert!(text.contains("€ 1.78"));
    assert!(text.contains("5.9%"));
    assert!(text.contains("Cassa Netta"));
    assert!(text.contains("Nuove tasse dal 2025"));
}

#[test]
fn test_json_round_trip() {
    let report = sample_report();
    let json = render::to_json(&report, JsonFormat::Pretty).unwrap();
    let back: Report = serde_json::from_str(&json).unwrap();

    assert_eq!(back.meta.as_of, report.meta.as_of);
    assert_eq!(back.analysis.len(), report.analysis.len());
    assert_eq!(
        back.analysis.get("Rischi").unwrap().body,
        report.analysis.get("Rischi").unwrap().body
    );
}

#[test]
fn test_builder_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analisi.txt");
    fs::write(&path, SAMPLE_ANALYSIS).unwrap();

    let built = ReportBuilder::new().from_file(&path).unwrap();
    assert_eq!(built.report().analysis.len(), 4);

    let md = built.to_markdown().unwrap();
    assert!(md.contains("DPS da €0.45 a €1.78"));
}

#[test]
fn test_missing_file_is_typed_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReportBuilder::new()
        .from_file(dir.path().join("manca.txt"))
        .unwrap_err();

    assert!(matches!(err, Error::AnalysisNotFound { .. }));
}

#[test]
fn test_unreadable_file_is_decode_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binario.txt");
    fs::write(&path, [0xFF, 0xFE, 0x80]).unwrap();

    let err = ReportBuilder::new().from_file(&path).unwrap_err();
    assert!(matches!(err, Error::AnalysisDecode { .. }));
}

#[test]
fn test_lenient_build_renders_placeholder_panel() {
    let dir = tempfile::tempdir().unwrap();
    let (built, warning) = ReportBuilder::new().from_file_lenient(dir.path().join("manca.txt"));

    assert!(warning.is_some());
    let md = built.to_markdown().unwrap();
    assert!(md.contains("Contenuto dell'analisi non disponibile."));
    // The rest of the report still renders.
    assert!(md.contains("Tabella Finanziaria Riassuntiva"));
}

#[test]
fn test_stats_reflect_panel_policy() {
    let report = sample_report();
    let result =
        render::to_markdown_with_stats(&report, &render::RenderOptions::default()).unwrap();

    assert_eq!(result.stats.section_count, 3);
    assert_eq!(result.stats.suppressed_count, 1);
    assert_eq!(result.stats.tile_count, 4);
    assert!(result.content_len() > 0);
}

#[test]
fn test_dataset_is_immutable_configuration() {
    let first = Dataset::builtin();
    let second = Dataset::builtin();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.dps_history.len(), 5);
}
