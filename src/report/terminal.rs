// Colored terminal output for the shortlist report.
//
// This module handles all terminal-specific formatting: colors, the ranked
// table, the top-N summary, and per-candidate warnings. The main.rs display
// logic delegates here.

use colored::Colorize;

use super::{format_percentage, summarize, SummaryEntry};
use crate::pipeline::{CandidateWarning, RankedReport};
use crate::scoring::fit::FitLabel;

/// Display the top-N recommended candidates.
pub fn display_summary(report: &RankedReport, n: usize) {
    let summary = summarize(report, n);
    if summary.is_empty() {
        return;
    }

    println!("\n{}", "=== Top Recommended Candidates ===".bold());
    for SummaryEntry {
        rank,
        candidate_id,
        fit,
        percentage,
    } in &summary
    {
        println!(
            "  {rank}. {candidate_id} — {} ({percentage:.2}%)",
            colorize_fit(*fit),
        );
    }
}

/// Display the full ranked table.
pub fn display_ranked(report: &RankedReport) {
    if report.is_empty() {
        println!("No candidates were scored.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Ranked Candidates ({}) ===", report.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<32} {:>9}  {:<7}  {}",
        "Rank".dimmed(),
        "Name".dimmed(),
        "Score".dimmed(),
        "Fit".dimmed(),
        "Matched / Missing".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, result) in report.results.iter().enumerate() {
        println!(
            "  {:>4}. {:<32} {:>8}%  {:<7}  {} / {}",
            i + 1,
            result.candidate_id,
            format_percentage(result.similarity),
            colorize_fit(result.fit),
            if result.matched_skills.is_empty() {
                "-".to_string()
            } else {
                result.matched_skills.join(", ")
            },
            if result.missing_skills.is_empty() {
                "-".to_string()
            } else {
                result.missing_skills.join(", ").dimmed().to_string()
            },
        );
    }
    println!();
}

/// Display one warning line per rejected or failed candidate.
pub fn display_warnings(warnings: &[CandidateWarning]) {
    for w in warnings {
        println!(
            "  {} {}: {}",
            "Warning:".yellow(),
            w.candidate_id,
            w.reason
        );
    }
}

/// Colorize a fit label.
fn colorize_fit(fit: FitLabel) -> colored::ColoredString {
    match fit {
        FitLabel::Strong => fit.as_str().green().bold(),
        FitLabel::Medium => fit.as_str().yellow(),
        FitLabel::Weak => fit.as_str().red(),
    }
}
