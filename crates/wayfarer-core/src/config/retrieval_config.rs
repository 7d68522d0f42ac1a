use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval configuration: neighbour windows and index memoisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Neighbour window for the suggest stage.
    pub suggest_k: usize,
    /// Neighbour window for the refinement query.
    pub refine_k: usize,
    /// Candidates kept from the refinement query before force-inclusion.
    pub refine_keep: usize,
    /// Neighbours fetched by the knowledge base.
    pub knowledge_k: usize,
    /// Max memoised indexes.
    pub index_cache_capacity: u64,
    /// Time-to-live of a memoised index (seconds).
    pub index_cache_ttl_secs: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            suggest_k: defaults::DEFAULT_SUGGEST_K,
            refine_k: defaults::DEFAULT_REFINE_K,
            refine_keep: defaults::DEFAULT_REFINE_KEEP,
            knowledge_k: defaults::DEFAULT_KNOWLEDGE_K,
            index_cache_capacity: defaults::DEFAULT_INDEX_CACHE_CAPACITY,
            index_cache_ttl_secs: defaults::DEFAULT_INDEX_CACHE_TTL_SECS,
        }
    }
}
