// The screening pipeline.
//
// One run: a job description, a batch of candidate documents, one report.
// Per candidate the flow is normalize → readability gate → embed → cosine
// against the job embedding → fit label → matched/missing skill partition,
// then a stable rank over everything that survived. Per-candidate problems
// (too little text, an embedding failure) become warnings and never abort
// the rest of the batch; only configuration problems are fatal, and those
// are caught before this module runs.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::document::Document;
use crate::embedding::similarity::cosine_similarity;
use crate::embedding::traits::TextEmbedder;
use crate::scoring::fit::FitLabel;
use crate::scoring::rank::rank;
use crate::skills::extract::{extract_skills, partition_skills};
use crate::skills::vocabulary::SkillVocabulary;
use crate::text::{is_readable, normalize, MIN_TEXT_CHARS};

/// Scored candidate: similarity against the job description, its fit band,
/// and the explainable skill breakdown. matched ∪ missing always equals the
/// job description's skill set, disjointly, both in vocabulary order.
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub candidate_id: String,
    pub similarity: f64,
    pub fit: FitLabel,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Ranked output of one run: results sorted by similarity descending,
/// stable by input order on ties.
#[derive(Debug, Clone)]
pub struct RankedReport {
    pub results: Vec<ScoreResult>,
}

impl RankedReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Why a candidate produced no ScoreResult.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Normalized text shorter than the readability threshold —
    /// typically a scanned/image-only PDF.
    InsufficientText { chars: usize },
    /// The embedding backend failed for this candidate's text.
    EmbeddingFailure(String),
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::InsufficientText { chars } => {
                write!(f, "insufficient readable text ({chars} chars)")
            }
            RejectionReason::EmbeddingFailure(msg) => write!(f, "embedding failed: {msg}"),
        }
    }
}

/// One warning per rejected or failed candidate.
#[derive(Debug, Clone)]
pub struct CandidateWarning {
    pub candidate_id: String,
    pub reason: RejectionReason,
}

/// Tunables for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Minimum normalized character count to score a candidate.
    pub min_text_chars: usize,
    /// How many candidate embeddings may be in flight at once.
    pub concurrency: usize,
    /// Upper bound on a single embedding call, so one pathological
    /// document cannot stall the whole batch.
    pub embed_timeout: Duration,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_text_chars: MIN_TEXT_CHARS,
            concurrency: 4,
            embed_timeout: Duration::from_secs(60),
        }
    }
}

/// Everything a run produces: the ranked report plus the warnings for
/// candidates that never made it into it.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub report: RankedReport,
    pub warnings: Vec<CandidateWarning>,
}

/// Run the full screening pipeline.
///
/// An empty candidate list yields an empty report. A failure embedding the
/// job description itself is fatal (nothing can be scored against it);
/// per-candidate embedding failures are isolated into warnings.
pub async fn run_analysis(
    embedder: &dyn TextEmbedder,
    vocab: &SkillVocabulary,
    job_text: &str,
    candidates: &[Document],
    opts: &AnalysisOptions,
) -> Result<AnalysisOutcome> {
    let job_normalized = normalize(job_text);
    let job_skills = extract_skills(&job_normalized, vocab);

    info!(
        candidates = candidates.len(),
        job_skills = job_skills.len(),
        "Starting analysis"
    );

    let job_embedding = embedder
        .embed(&job_normalized)
        .await
        .context("Failed to embed the job description")?;

    let mut warnings = Vec::new();

    // Normalize and gate first — rejected candidates never reach the model.
    let mut survivors: Vec<(String, String)> = Vec::new();
    for doc in candidates {
        let normalized = normalize(&doc.raw_text);
        if !is_readable(&normalized, opts.min_text_chars) {
            let chars = normalized.chars().count();
            warn!(candidate = %doc.id, chars, "Rejecting candidate: insufficient readable text");
            warnings.push(CandidateWarning {
                candidate_id: doc.id.clone(),
                reason: RejectionReason::InsufficientText { chars },
            });
            continue;
        }
        survivors.push((doc.id.clone(), normalized));
    }

    // Embed survivors with bounded concurrency. `buffered` (not
    // buffer_unordered) keeps results in input order, so ties rank by the
    // order candidates were supplied, not by worker completion order.
    let embed_timeout = opts.embed_timeout;
    let embedded: Vec<(String, String, Result<Vec<f64>>)> = stream::iter(survivors)
        .map(|(id, text)| async move {
            let result = match tokio::time::timeout(embed_timeout, embedder.embed(&text)).await {
                Ok(result) => result,
                Err(_) => Err(anyhow!("embedding timed out after {embed_timeout:?}")),
            };
            (id, text, result)
        })
        .buffered(opts.concurrency.max(1))
        .collect()
        .await;

    let mut results = Vec::with_capacity(embedded.len());
    for (id, normalized, embedding) in embedded {
        let embedding = match embedding {
            Ok(v) => v,
            Err(e) => {
                warn!(candidate = %id, error = %e, "Embedding failed for candidate");
                warnings.push(CandidateWarning {
                    candidate_id: id,
                    reason: RejectionReason::EmbeddingFailure(e.to_string()),
                });
                continue;
            }
        };

        let similarity = cosine_similarity(&job_embedding, &embedding);
        let fit = FitLabel::from_similarity(similarity);

        let candidate_skills = extract_skills(&normalized, vocab);
        let (matched_skills, missing_skills) = partition_skills(&job_skills, &candidate_skills);

        debug!(
            candidate = %id,
            similarity,
            fit = %fit,
            matched = matched_skills.len(),
            missing = missing_skills.len(),
            "Scored candidate"
        );

        results.push(ScoreResult {
            candidate_id: id,
            similarity,
            fit,
            matched_skills,
            missing_skills,
        });
    }

    let report = RankedReport {
        results: rank(results),
    };

    info!(
        ranked = report.len(),
        rejected = warnings.len(),
        "Analysis complete"
    );

    Ok(AnalysisOutcome { report, warnings })
}
