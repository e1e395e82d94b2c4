//! IEmbeddingProvider: injectable text embedding service.
//!
//! Providers are constructed explicitly by the host and passed into the
//! classifier; model loading and teardown belong to the implementor.

use crate::errors::DriftLensResult;

pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> DriftLensResult<Vec<f32>>;

    /// Embed several texts, in order.
    fn embed_batch(&self, texts: &[String]) -> DriftLensResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Output dimensionality.
    fn dimensions(&self) -> usize;

    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Whether the provider can currently serve requests.
    fn is_available(&self) -> bool;
}
