use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "tfidf" or "ollama".
    pub provider: String,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// Batch size for corpus encoding.
    pub batch_size: usize,
    /// L1 in-memory cache max entries.
    pub l1_cache_size: u64,
    /// Ollama model name.
    pub ollama_model: String,
    /// Ollama base URL.
    pub ollama_url: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            ollama_model: defaults::DEFAULT_OLLAMA_MODEL.to_string(),
            ollama_url: defaults::DEFAULT_OLLAMA_URL.to_string(),
        }
    }
}
