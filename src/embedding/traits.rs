// Text embedder trait — the swap-ready abstraction.
//
// This trait defines the interface between the scoring pipeline and the
// embedding model. The default implementation runs all-MiniLM-L6-v2 locally
// via ONNX; tests substitute a deterministic stub so the pipeline can be
// exercised without model files.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for embedding text into fixed-length vectors. The pipeline only
/// requires that identical input text yields identical vectors and that
/// cosine similarity is well-defined over them; the dimension is fixed per
/// implementation and opaque to callers.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Embed a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f64>>;

    /// Embed multiple texts, returning vectors in the same order.
    /// Default implementation calls embed sequentially — backends can
    /// override for true batching where per-call overhead dominates.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }
}
