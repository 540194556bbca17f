//! Builtin report dataset.
//!
//! The figures below are fixed inputs extracted from the FDJ analysis text
//! and the accompanying financial PDF. They are process-wide immutable
//! configuration: built once on first access, never mutated.

use chrono::NaiveDate;
use std::sync::OnceLock;

use crate::model::{
    DpsPoint, FinancialRow, FinancialTable, LineChart, MetricTile, Report, ReportMeta, SectionList,
    Verdict,
};

/// Fixed dataset backing the dividend report.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Company display name.
    pub company: String,
    /// Exchange ticker.
    pub ticker: String,
    /// Date the analysis was written.
    pub as_of: NaiveDate,
    /// Last dividend per share actually paid, in euros.
    pub last_dps_eur: f64,
    /// Fiscal year the last paid DPS relates to.
    pub last_dps_year: u16,
    /// Approximate reference share price used for the trailing yield.
    pub reference_price_eur: f64,
    /// Stated payout policy.
    pub payout_policy: String,
    /// Expected DPS for the next fiscal year, in euros.
    pub expected_dps_eur: f64,
    /// Fiscal year of the expected DPS.
    pub expected_dps_year: u16,
    /// Expected DPS growth, preformatted.
    pub expected_dps_growth: String,
    /// Expected dividend uplift from the Kindred acquisition.
    pub kindred_note: String,
    /// Historical DPS series in ascending fiscal-year order.
    pub dps_history: Vec<DpsPoint>,
    /// Summary financial table.
    pub financials: FinancialTable,
    /// Investor-oriented conclusions.
    pub verdict: Verdict,
}

impl Dataset {
    /// The builtin dataset, initialized once per process.
    pub fn builtin() -> &'static Dataset {
        static DATASET: OnceLock<Dataset> = OnceLock::new();
        DATASET.get_or_init(Dataset::build)
    }

    /// Trailing dividend yield in percent, when a reference price is set.
    pub fn trailing_yield_pct(&self) -> Option<f64> {
        (self.reference_price_eur > 0.0)
            .then(|| self.last_dps_eur / self.reference_price_eur * 100.0)
    }

    /// Key indicator tiles in display order.
    pub fn metric_tiles(&self) -> Vec<MetricTile> {
        vec![
            MetricTile::new(
                format!("Ultimo DPS Pagato (Esercizio {})", self.last_dps_year),
                format!("€ {:.2}", self.last_dps_eur),
            )
            .with_help("Dividendo pagato nel 2024 relativo all'esercizio 2023."),
            MetricTile::new(
                "Dividend Yield (Trailing Approx.)",
                match self.trailing_yield_pct() {
                    Some(y) => format!("{:.1}%", y),
                    None => "N/A".to_string(),
                },
            )
            .with_help(format!(
                "Basato sull'ultimo DPS (€{:.2}) e un prezzo di riferimento di €{:.2}.",
                self.last_dps_eur, self.reference_price_eur
            )),
            MetricTile::new("Politica di Payout", self.payout_policy.clone())
                .with_help("Politica dichiarata per la distribuzione degli utili netti."),
            MetricTile::new(
                format!("DPS Atteso (Esercizio {})", self.expected_dps_year),
                format!(
                    "€ {:.2} ({})",
                    self.expected_dps_eur, self.expected_dps_growth
                ),
            )
            .with_help(format!(
                "Previsione da analisi. Ulteriore potenziale rialzo: {}.",
                self.kindred_note
            )),
        ]
    }

    /// The historical DPS series as a chart.
    pub fn dps_chart(&self) -> LineChart {
        LineChart {
            title: format!(
                "Andamento DPS {} (Esercizi {}-{})",
                self.ticker,
                self.dps_history.first().map_or(0, |p| p.fiscal_year),
                self.dps_history.last().map_or(0, |p| p.fiscal_year),
            ),
            x_label: "Anno Esercizio Fiscale".to_string(),
            y_label: "Dividendo per Azione (€)".to_string(),
            points: self.dps_history.clone(),
        }
    }

    /// Assemble a full report around a sectionized analysis document.
    pub fn build_report(&self, analysis: SectionList) -> Report {
        Report {
            meta: ReportMeta {
                company: self.company.clone(),
                ticker: self.ticker.clone(),
                as_of: self.as_of,
                source_note: "Dati estratti da Analisi_FDJ.txt e TIKR PDF (colonna 31/12/24 \
                              usata come LTM). FCF calcolato come CFO - Capex."
                    .to_string(),
            },
            tiles: self.metric_tiles(),
            dps_chart: self.dps_chart(),
            financials: self.financials.clone(),
            analysis,
            verdict: self.verdict.clone(),
        }
    }

    fn build() -> Dataset {
        let dps_history = vec![
            DpsPoint {
                fiscal_year: 2019,
                dps_eur: 0.45,
            },
            DpsPoint {
                fiscal_year: 2020,
                dps_eur: 0.90,
            },
            DpsPoint {
                fiscal_year: 2021,
                dps_eur: 1.24,
            },
            DpsPoint {
                fiscal_year: 2022,
                dps_eur: 1.37,
            },
            DpsPoint {
                fiscal_year: 2023,
                dps_eur: 1.78,
            },
        ];

        let financials = FinancialTable {
            columns: vec![
                "2021".to_string(),
                "2022".to_string(),
                "2023".to_string(),
                "LTM (31/12/24)".to_string(),
            ],
            rows: vec![
                FinancialRow {
                    metric: "Ricavi Totali (€M)".to_string(),
                    values: vec![2255.7.into(), 2461.1.into(), 2621.5.into(), 3065.1.into()],
                },
                FinancialRow {
                    metric: "Utile Netto (€M)".to_string(),
                    values: vec![294.2.into(), 307.9.into(), 425.1.into(), 398.8.into()],
                },
                FinancialRow {
                    metric: "EPS Diluito (€)".to_string(),
                    values: vec![1.54.into(), 1.61.into(), 2.23.into(), 2.16.into()],
                },
                FinancialRow {
                    metric: "Cash Flow Operativo (CFO, €M)".to_string(),
                    values: vec![602.9.into(), 406.1.into(), 628.9.into(), 577.0.into()],
                },
                FinancialRow {
                    metric: "Capex (€M)".to_string(),
                    values: vec![(-75.5).into(), (-104.1).into(), (-124.7).into(), (-149.9).into()],
                },
                FinancialRow {
                    metric: "Free Cash Flow (FCF, €M)".to_string(),
                    values: vec![527.4.into(), 302.0.into(), 504.2.into(), 427.1.into()],
                },
                FinancialRow {
                    metric: "Debito Netto / EBITDA (Leva)".to_string(),
                    values: vec![
                        "Cassa Netta".into(),
                        "Cassa Netta".into(),
                        "Cassa Netta".into(),
                        "~2.0-2.2x (prospettico post-Kindred)".into(),
                    ],
                },
                FinancialRow {
                    metric: "Dividendo per Azione (DPS, €)".to_string(),
                    values: vec![
                        1.24.into(),
                        1.37.into(),
                        1.78.into(),
                        "2.05 (atteso ex. 2024)".into(),
                    ],
                },
            ],
        };

        let verdict = Verdict {
            strengths: vec![
                "Politica Dividendi Generosa: payout target 80-90% dell'utile netto.".to_string(),
                "Storico di Crescita Robusto: il DPS è aumentato da €0.45 a €1.78 dall'IPO."
                    .to_string(),
                "Yield Attraente: rendimento trailing ~5.9%, forward stimato 6-7%.".to_string(),
                "Flussi di Cassa Stabili: il monopolio lotterie (fino 2044) garantisce cassa \
                 prevedibile e resiliente."
                    .to_string(),
                "Prospettive di Crescita: atteso €2.05 per il 2024 e potenziale boost da \
                 Kindred nel 2026."
                    .to_string(),
                "Solidità Finanziaria: rating Investment Grade (Baa1) e leva gestibile \
                 post-acquisizioni (~2x)."
                    .to_string(),
            ],
            risks: vec![
                "Nuove Tasse 2025: impatto negativo atteso di €90M/anno sull'EBITDA da metà \
                 2025."
                    .to_string(),
                "Piani di Mitigazione: la società punta a compensare l'impatto fiscale entro \
                 il 2027, efficacia da verificare."
                    .to_string(),
                "Rischi Integrazione M&A: l'acquisizione di Kindred comporta rischi di \
                 esecuzione e integrazione."
                    .to_string(),
                "Concorrenza Online: il segmento scommesse/giochi online ha margini più bassi \
                 e volatili delle lotterie."
                    .to_string(),
                "Rischio Normativo: tasse, restrizioni pubblicità e revisione concessioni in \
                 Francia e UE."
                    .to_string(),
            ],
            summary: "FDJ presenta un profilo interessante per l'investitore da dividendo \
                      grazie a yield elevato, crescita storica e solidità del business \
                      principale. L'impatto delle nuove tasse nel 2025 e l'integrazione di \
                      Kindred restano i fattori chiave da monitorare."
                .to_string(),
        };

        Dataset {
            company: "Française des Jeux".to_string(),
            ticker: "FDJ.PA".to_string(),
            as_of: NaiveDate::from_ymd_opt(2024, 4, 15).expect("valid builtin date"),
            last_dps_eur: 1.78,
            last_dps_year: 2023,
            reference_price_eur: 30.0,
            payout_policy: "80-90% Utile Netto (dal 2022)".to_string(),
            expected_dps_eur: 2.05,
            expected_dps_year: 2024,
            expected_dps_growth: "+15%".to_string(),
            kindred_note: "+10% addizionale dal 2026 (utile 2025)".to_string(),
            dps_history,
            financials,
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_shared() {
        let a = Dataset::builtin();
        let b = Dataset::builtin();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_trailing_yield() {
        let data = Dataset::builtin();
        let yield_pct = data.trailing_yield_pct().unwrap();
        assert!((yield_pct - 5.933).abs() < 0.01);
    }

    #[test]
    fn test_trailing_yield_without_price() {
        let mut data = Dataset::builtin().clone();
        data.reference_price_eur = 0.0;
        assert!(data.trailing_yield_pct().is_none());
    }

    #[test]
    fn test_dps_history_ascending() {
        let data = Dataset::builtin();
        assert_eq!(data.dps_history.len(), 5);
        assert!(data
            .dps_history
            .windows(2)
            .all(|w| w[0].fiscal_year < w[1].fiscal_year));
    }

    #[test]
    fn test_metric_tiles() {
        let tiles = Dataset::builtin().metric_tiles();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].value, "€ 1.78");
        assert_eq!(tiles[1].value, "5.9%");
        assert_eq!(tiles[3].value, "€ 2.05 (+15%)");
    }

    #[test]
    fn test_build_report() {
        let mut analysis = SectionList::new();
        analysis.insert("Introduzione", "testo");

        let report = Dataset::builtin().build_report(analysis);
        assert_eq!(report.meta.ticker, "FDJ.PA");
        assert_eq!(report.financials.rows.len(), 8);
        assert_eq!(report.dps_chart.points.len(), 5);
        assert_eq!(report.visible_section_count(), 1);
    }
}
