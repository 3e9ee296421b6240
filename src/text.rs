// Text normalization and the minimum-readability gate.
//
// Raw text from PDF extraction arrives with arbitrary line breaks, tabs,
// and runs of spaces. Normalization collapses every maximal whitespace run
// into a single ASCII space and trims the ends, so downstream substring
// matching and embedding see canonical input. Case is preserved.

/// Minimum number of characters a normalized candidate text must have to be
/// scored. Extraction from scanned/image-only PDFs yields near-empty text;
/// scoring it would produce a misleadingly low similarity instead of a
/// diagnosable rejection.
pub const MIN_TEXT_CHARS: usize = 300;

/// Collapse all whitespace runs (including newlines) into single spaces and
/// trim leading/trailing whitespace. Pure and idempotent.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a normalized text passes the readability gate.
pub fn is_readable(normalized: &str, min_chars: usize) -> bool {
    normalized.chars().count() >= min_chars
}
