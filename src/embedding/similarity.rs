// Cosine similarity between embedding vectors.
//
// The result is left in the full [-1, 1] cosine range rather than clamped:
// a negative similarity is meaningful to the fit classifier (it lands in
// the Weak band) and clamping would hide it from the report.

/// Cosine similarity between two vectors: dot product over the product of
/// magnitudes. Returns 0.0 for empty, mismatched-length, or zero-magnitude
/// inputs. Symmetric in its arguments.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        0.0
    } else {
        dot / denom
    }
}
