// Ranking scored candidates.
//
// Sorting is stable: candidates with equal similarity keep the relative
// order in which they were supplied, so the final ordering depends only on
// scores and input order — never on which concurrent worker finished first.

use crate::pipeline::ScoreResult;

/// Sort results by similarity, descending. Stable on ties.
pub fn rank(mut results: Vec<ScoreResult>) -> Vec<ScoreResult> {
    // sort_by is stable; comparing b to a gives descending order.
    // total_cmp keeps the comparison total even for pathological floats.
    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    results
}

/// The first `n` entries of a ranked list (fewer if the list is shorter).
pub fn top_n(ranked: &[ScoreResult], n: usize) -> &[ScoreResult] {
    &ranked[..n.min(ranked.len())]
}
