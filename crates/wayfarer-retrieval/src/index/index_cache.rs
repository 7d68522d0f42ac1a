//! Memoised index builds.
//!
//! Keyed by a blake3 hash of the encoder identity and the indexed content.
//! Concurrent requests for one key share a single build.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use tracing::info;
use wayfarer_core::config::RetrievalConfig;
use wayfarer_core::errors::{EmbeddingError, WayfarerResult};
use wayfarer_core::traits::IEmbeddingProvider;

use super::EmbeddingIndex;

pub struct IndexCache {
    indexes: Cache<String, Arc<EmbeddingIndex>>,
}

impl IndexCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let indexes = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self { indexes }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(
            config.index_cache_capacity,
            Duration::from_secs(config.index_cache_ttl_secs),
        )
    }

    /// Field separators keep `["ab","c"]` and `["a","bc"]` distinct.
    pub fn key(encoder: &str, dimensions: usize, names: &[String], texts: &[String]) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(encoder.as_bytes());
        hasher.update(&[0]);
        hasher.update(&(dimensions as u64).to_le_bytes());
        for (name, text) in names.iter().zip(texts) {
            hasher.update(name.as_bytes());
            hasher.update(&[0]);
            hasher.update(text.as_bytes());
            hasher.update(&[1]);
        }
        hasher.update(&(names.len() as u64).to_le_bytes());
        hasher.update(&(texts.len() as u64).to_le_bytes());
        hasher.finalize().to_hex().to_string()
    }

    /// Return the memoised index for this content, building it on first use.
    pub fn get_or_build(
        &self,
        encoder: &dyn IEmbeddingProvider,
        names: &[String],
        texts: &[String],
    ) -> WayfarerResult<Arc<EmbeddingIndex>> {
        let key = Self::key(encoder.name(), encoder.dimensions(), names, texts);
        self.indexes
            .try_get_with(key, || {
                info!(encoder = encoder.name(), entries = names.len(), "building index");
                EmbeddingIndex::build(encoder, names.to_vec(), texts).map(Arc::new)
            })
            .map_err(|e| {
                EmbeddingError::IndexBuildFailed {
                    reason: e.to_string(),
                }
                .into()
            })
    }

    /// Drop every memoised index; the next request rebuilds.
    pub fn invalidate_all(&self) {
        self.indexes.invalidate_all();
    }

    pub fn len(&self) -> u64 {
        self.indexes.run_pending_tasks();
        self.indexes.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::from_config(&RetrievalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_separates_field_boundaries() {
        let a = IndexCache::key("tfidf", 8, &["ab".into()], &["c".into()]);
        let b = IndexCache::key("tfidf", 8, &["a".into()], &["bc".into()]);
        assert_ne!(a, b);
    }

    #[test]
    fn key_depends_on_encoder() {
        let names = vec!["Kyoto".to_string()];
        let texts = vec!["temples".to_string()];
        assert_ne!(
            IndexCache::key("tfidf", 8, &names, &texts),
            IndexCache::key("all-minilm", 8, &names, &texts)
        );
        assert_ne!(
            IndexCache::key("tfidf", 8, &names, &texts),
            IndexCache::key("tfidf", 16, &names, &texts)
        );
    }
}
