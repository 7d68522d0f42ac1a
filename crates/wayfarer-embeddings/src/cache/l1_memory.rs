//! In-memory embedding cache backed by moka.
//!
//! Entries are keyed by the blake3 hash of the embedded text, so identical
//! texts across the corpus and across queries share one vector.

use std::time::Duration;

use moka::sync::Cache;

/// Default lifetime of a cached vector.
const DEFAULT_TTL: Duration = Duration::from_secs(86_400);

pub struct L1MemoryCache {
    vectors: Cache<String, Vec<f32>>,
}

impl L1MemoryCache {
    /// Bounded cache with the default 24 hour lifetime.
    pub fn new(max_entries: u64) -> Self {
        Self::with_ttl(max_entries, DEFAULT_TTL)
    }

    pub fn with_ttl(max_entries: u64, ttl: Duration) -> Self {
        let vectors = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { vectors }
    }

    pub fn get(&self, content_hash: &str) -> Option<Vec<f32>> {
        self.vectors.get(content_hash)
    }

    pub fn insert(&self, content_hash: String, embedding: Vec<f32>) {
        self.vectors.insert(content_hash, embedding);
    }

    /// Approximate entry count; moka applies writes lazily.
    pub fn len(&self) -> u64 {
        self.vectors.run_pending_tasks();
        self.vectors.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.vectors.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_by_hash() {
        let cache = L1MemoryCache::new(16);
        cache.insert("h1".to_string(), vec![0.5, 0.5]);
        assert_eq!(cache.get("h1"), Some(vec![0.5, 0.5]));
        assert_eq!(cache.get("h2"), None);
    }

    #[test]
    fn len_reflects_inserts() {
        let cache = L1MemoryCache::new(16);
        cache.insert("a".to_string(), vec![1.0]);
        cache.insert("b".to_string(), vec![2.0]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clear_drops_entries() {
        let cache = L1MemoryCache::new(16);
        cache.insert("a".to_string(), vec![1.0]);
        cache.clear();
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn expired_entries_are_not_served() {
        let cache = L1MemoryCache::with_ttl(16, Duration::from_millis(20));
        cache.insert("a".to_string(), vec![1.0]);
        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(cache.get("a"), None);
    }
}
