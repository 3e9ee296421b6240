// Unit tests for fit classification, ranking, and percentage rounding.

use shortlist::pipeline::{RankedReport, ScoreResult};
use shortlist::report::{format_percentage, round_percentage, rows};
use shortlist::scoring::fit::FitLabel;
use shortlist::scoring::rank::{rank, top_n};

fn result(id: &str, similarity: f64) -> ScoreResult {
    ScoreResult {
        candidate_id: id.to_string(),
        similarity,
        fit: FitLabel::from_similarity(similarity),
        matched_skills: vec![],
        missing_skills: vec![],
    }
}

// ============================================================
// classification boundaries
// ============================================================

#[test]
fn boundary_forty_percent_belongs_to_strong() {
    assert_eq!(FitLabel::from_similarity(0.40), FitLabel::Strong);
    assert_eq!(FitLabel::from_similarity(0.39999), FitLabel::Medium);
}

#[test]
fn boundary_twenty_percent_belongs_to_medium() {
    assert_eq!(FitLabel::from_similarity(0.20), FitLabel::Medium);
    assert_eq!(FitLabel::from_similarity(0.19999), FitLabel::Weak);
}

#[test]
fn classifier_is_total_over_cosine_range() {
    for s in [-1.0, -0.5, 0.0, 0.2, 0.4, 1.0] {
        // Must not panic anywhere in [-1, 1]
        let _ = FitLabel::from_similarity(s);
    }
    assert_eq!(FitLabel::from_similarity(-1.0), FitLabel::Weak);
}

#[test]
fn scenario_c_classification_and_formatting() {
    assert_eq!(FitLabel::from_similarity(0.42), FitLabel::Strong);
    assert_eq!(format_percentage(0.42), "42.00");

    assert_eq!(FitLabel::from_similarity(0.195), FitLabel::Weak);
    assert_eq!(format_percentage(0.195), "19.50");
}

// ============================================================
// ranking — descending, stable
// ============================================================

#[test]
fn ranking_is_descending_by_similarity() {
    let ranked = rank(vec![
        result("c.pdf", 0.35),
        result("a.pdf", 0.91),
        result("b.pdf", 0.72),
    ]);
    let sims: Vec<f64> = ranked.iter().map(|r| r.similarity).collect();
    assert!(sims.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(ranked[0].candidate_id, "a.pdf");
}

#[test]
fn scenario_d_equal_scores_preserve_input_order() {
    // B.pdf supplied before A.pdf, both 0.30 (Medium)
    let ranked = rank(vec![result("B.pdf", 0.30), result("A.pdf", 0.30)]);
    assert_eq!(ranked[0].candidate_id, "B.pdf");
    assert_eq!(ranked[1].candidate_id, "A.pdf");
    assert_eq!(ranked[0].fit, FitLabel::Medium);
}

#[test]
fn top_n_is_a_prefix_of_the_ranking() {
    let ranked = rank(vec![
        result("a", 0.9),
        result("b", 0.8),
        result("c", 0.7),
        result("d", 0.6),
    ]);
    let top = top_n(&ranked, 3);
    assert_eq!(top.len(), 3);
    for (t, r) in top.iter().zip(ranked.iter()) {
        assert_eq!(t.candidate_id, r.candidate_id);
    }
}

// ============================================================
// rounding round-trip
// ============================================================

#[test]
fn report_score_column_equals_rounded_classifier_input() {
    let report = RankedReport {
        results: rank(vec![result("a.pdf", 0.123456), result("b.pdf", 0.42)]),
    };
    for (row, result) in rows(&report).iter().zip(report.results.iter()) {
        let parsed: f64 = row.match_score.parse().unwrap();
        assert!(
            (parsed - round_percentage(result.similarity)).abs() < 1e-9,
            "CSV column {} != rounded score {}",
            row.match_score,
            round_percentage(result.similarity)
        );
    }
}

#[test]
fn rounding_is_half_away_from_zero() {
    // 0.125 scales to exactly 1250.0 (exactly representable), and a value
    // just above the half at the second decimal rounds up.
    assert_eq!(round_percentage(0.125), 12.5);
    assert_eq!(format_percentage(0.125), "12.50");
    assert_eq!(round_percentage(0.123455), 12.35);
}
