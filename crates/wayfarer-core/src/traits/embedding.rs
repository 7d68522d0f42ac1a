use crate::errors::WayfarerResult;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> WayfarerResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> WayfarerResult<Vec<Vec<f32>>>;

    /// Embed a single text and name the provider whose space the vector lives in.
    ///
    /// Composite providers that can fall back override this so callers can
    /// tell when the serving provider changed.
    fn embed_attributed(&self, text: &str) -> WayfarerResult<(Vec<f32>, String)> {
        Ok((self.embed(text)?, self.name().to_string()))
    }

    /// Batch form of `embed_attributed`. Every vector comes from one provider.
    fn embed_batch_attributed(
        &self,
        texts: &[String],
    ) -> WayfarerResult<(Vec<Vec<f32>>, String)> {
        Ok((self.embed_batch(texts)?, self.name().to_string()))
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
