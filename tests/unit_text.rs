// Unit tests for text normalization properties.
//
// The inline module tests cover the basics; these pin the contract-level
// properties: idempotence, whitespace canonicalization over messy realistic
// input, and the readability gate threshold.

use shortlist::text::{is_readable, normalize, MIN_TEXT_CHARS};

// ============================================================
// normalize — canonical whitespace properties
// ============================================================

#[test]
fn normalize_is_idempotent_over_messy_input() {
    let inputs = [
        "John Doe\nSenior Engineer\n\n  Experience:\n\t- Built services\r\n- Led teams",
        "   \n\t  ",
        "single",
        "a\u{00a0}b", // non-breaking space is whitespace too
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "Not idempotent for {input:?}");
    }
}

#[test]
fn normalize_output_has_no_consecutive_spaces() {
    let out = normalize("a  b\n\n\nc\t\t\td    e");
    assert!(!out.contains("  "), "Consecutive spaces in {out:?}");
}

#[test]
fn normalize_output_has_no_leading_or_trailing_whitespace() {
    let out = normalize("\n\t  padded text  \t\n");
    assert_eq!(out, out.trim());
}

#[test]
fn normalize_replaces_newlines_with_single_spaces() {
    // Page-extracted resume text arrives with line breaks mid-sentence
    let out = normalize("Python\ndeveloper\nwith\nDocker");
    assert_eq!(out, "Python developer with Docker");
}

// ============================================================
// readability gate
// ============================================================

#[test]
fn default_threshold_is_three_hundred() {
    assert_eq!(MIN_TEXT_CHARS, 300);
}

#[test]
fn scenario_b_text_of_120_chars_is_not_readable() {
    let text = "x".repeat(120);
    assert!(!is_readable(&text, MIN_TEXT_CHARS));
}

#[test]
fn gate_respects_custom_threshold() {
    let text = "x".repeat(120);
    assert!(is_readable(&text, 100));
    assert!(!is_readable(&text, 121));
}
