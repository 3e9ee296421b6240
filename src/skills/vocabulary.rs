// The fixed skill vocabulary.
//
// An ordered list of lowercase terms, loaded once per process. Order is
// significant: matched/missing skill lists in the report follow vocabulary
// order, so a stable vocabulary gives stable, comparable reports.

use std::path::Path;

use anyhow::{Context, Result};

/// Built-in default vocabulary. Used when no vocabulary file is configured.
const DEFAULT_TERMS: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "mysql",
    "postgresql",
    "django",
    "flask",
    "fastapi",
    "react",
    "node.js",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "machine learning",
    "tensorflow",
    "pytorch",
    "data structures",
    "algorithms",
];

/// Ordered sequence of unique lowercase skill terms.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    /// Build a vocabulary from raw terms. Terms are trimmed and lowercased;
    /// blank terms and duplicates (after lowercasing) are configuration
    /// errors — a malformed vocabulary would silently skew every report,
    /// so it is rejected before any candidate is processed.
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();

        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                anyhow::bail!("Skill vocabulary contains a blank term");
            }
            if !seen.insert(term.clone()) {
                anyhow::bail!("Skill vocabulary contains duplicate term: {term:?}");
            }
            out.push(term);
        }

        if out.is_empty() {
            anyhow::bail!("Skill vocabulary is empty");
        }

        Ok(Self { terms: out })
    }

    /// The built-in default vocabulary.
    pub fn default_vocabulary() -> Self {
        // The built-in list is known-good; new() cannot fail on it.
        Self::new(DEFAULT_TERMS).expect("built-in vocabulary is valid")
    }

    /// Load a vocabulary from a file with one term per line.
    /// Blank lines and `#` comment lines are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file: {}", path.display()))?;

        let terms: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();

        Self::new(terms)
            .with_context(|| format!("Invalid vocabulary file: {}", path.display()))
    }

    /// Terms in vocabulary order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_valid() {
        let vocab = SkillVocabulary::default_vocabulary();
        assert!(!vocab.is_empty());
        assert_eq!(vocab.terms()[0], "python");
    }

    #[test]
    fn test_terms_are_lowercased() {
        let vocab = SkillVocabulary::new(["Python", "DOCKER"]).unwrap();
        assert_eq!(vocab.terms(), &["python", "docker"]);
    }

    #[test]
    fn test_order_preserved() {
        let vocab = SkillVocabulary::new(["zig", "ada", "cobol"]).unwrap();
        assert_eq!(vocab.terms(), &["zig", "ada", "cobol"]);
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let terms: Vec<&str> = vec![];
        assert!(SkillVocabulary::new(terms).is_err());
    }

    #[test]
    fn test_duplicate_rejected() {
        // Duplicates after case folding are still duplicates
        assert!(SkillVocabulary::new(["python", "Python"]).is_err());
    }

    #[test]
    fn test_blank_term_rejected() {
        assert!(SkillVocabulary::new(["python", "  "]).is_err());
    }

    #[test]
    fn test_from_file_skips_comments_and_blanks() {
        let path = std::env::temp_dir().join("shortlist-vocab-test.txt");
        std::fs::write(&path, "# languages\npython\n\nrust\n").unwrap();
        let vocab = SkillVocabulary::from_file(&path).unwrap();
        assert_eq!(vocab.terms(), &["python", "rust"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing() {
        let path = std::env::temp_dir().join("shortlist-vocab-nonexistent.txt");
        assert!(SkillVocabulary::from_file(&path).is_err());
    }
}
