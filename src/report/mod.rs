// Report assembly — turning a ranked report into summary and table form.

pub mod csv;
pub mod terminal;

use serde::Serialize;

use crate::pipeline::{RankedReport, ScoreResult};
use crate::scoring::fit::FitLabel;
use crate::scoring::rank::top_n;

/// One entry in the top-N summary.
#[derive(Debug, Clone)]
pub struct SummaryEntry {
    /// 1-based rank.
    pub rank: usize,
    pub candidate_id: String,
    pub fit: FitLabel,
    /// Match percentage, rounded to 2 decimals.
    pub percentage: f64,
}

/// One row of the full tabular report. Field order and header names are
/// the CSV schema; serde renames produce the exact column headers.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Match Score (%)")]
    pub match_score: String,
    #[serde(rename = "Fit Level")]
    pub fit_level: String,
    #[serde(rename = "Matched Skills")]
    pub matched_skills: String,
    #[serde(rename = "Missing Skills")]
    pub missing_skills: String,
}

/// Round a similarity to a 2-decimal percentage.
///
/// Rounding mode: half away from zero (`f64::round` on the scaled value),
/// i.e. round-half-up for the non-negative scores seen in practice.
pub fn round_percentage(similarity: f64) -> f64 {
    (similarity * 100.0 * 100.0).round() / 100.0
}

/// Format a rounded percentage with exactly 2 decimal places.
pub fn format_percentage(similarity: f64) -> String {
    format!("{:.2}", round_percentage(similarity))
}

/// Build the top-N summary from a ranked report.
pub fn summarize(report: &RankedReport, n: usize) -> Vec<SummaryEntry> {
    top_n(&report.results, n)
        .iter()
        .enumerate()
        .map(|(i, r)| SummaryEntry {
            rank: i + 1,
            candidate_id: r.candidate_id.clone(),
            fit: r.fit,
            percentage: round_percentage(r.similarity),
        })
        .collect()
}

/// Build one table row per ranked candidate, in ranked order.
pub fn rows(report: &RankedReport) -> Vec<ReportRow> {
    report.results.iter().map(row).collect()
}

fn row(result: &ScoreResult) -> ReportRow {
    ReportRow {
        name: result.candidate_id.clone(),
        match_score: format_percentage(result.similarity),
        fit_level: result.fit.to_string(),
        matched_skills: result.matched_skills.join(", "),
        missing_skills: result.missing_skills.join(", "),
    }
}
