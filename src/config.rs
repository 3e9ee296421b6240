use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::skills::vocabulary::SkillVocabulary;
use crate::text::MIN_TEXT_CHARS;

/// Central configuration loaded from environment variables.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory containing the ONNX embedding model files.
    pub model_dir: PathBuf,
    /// Optional vocabulary file (one term per line). When unset, the
    /// built-in default vocabulary is used.
    pub vocab_path: Option<PathBuf>,
    /// Minimum normalized character count to score a candidate.
    pub min_text_chars: usize,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default — the tool runs out of the box once the model is downloaded.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("SHORTLIST_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::embedding::download::default_model_dir());

        let vocab_path = env::var("SHORTLIST_VOCAB_PATH").ok().map(PathBuf::from);

        let min_text_chars = match env::var("SHORTLIST_MIN_TEXT_CHARS") {
            Ok(v) => v.parse().map_err(|_| {
                anyhow::anyhow!("SHORTLIST_MIN_TEXT_CHARS must be a non-negative integer, got {v:?}")
            })?,
            Err(_) => MIN_TEXT_CHARS,
        };

        Ok(Self {
            model_dir,
            vocab_path,
            min_text_chars,
        })
    }

    /// Check that the embedding model files are present.
    /// Call this before any operation that needs scoring.
    pub fn require_model(&self) -> Result<()> {
        if !crate::embedding::download::model_files_present(&self.model_dir) {
            anyhow::bail!(
                "Embedding model files not found in {}\n\
                 Run `shortlist download-model` to download them.",
                self.model_dir.display()
            );
        }
        Ok(())
    }

    /// Load the skill vocabulary: from the configured file when set,
    /// otherwise the built-in default list. A malformed vocabulary is a
    /// fatal configuration error, surfaced before any candidate is
    /// processed.
    pub fn load_vocabulary(&self) -> Result<SkillVocabulary> {
        match &self.vocab_path {
            Some(path) => SkillVocabulary::from_file(path),
            None => Ok(SkillVocabulary::default_vocabulary()),
        }
    }
}
