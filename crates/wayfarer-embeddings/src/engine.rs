//! EmbeddingEngine: provider fallback plus a content-hash vector cache.
//!
//! Implements `IEmbeddingProvider`, so the index and knowledge base can take
//! it wherever a plain provider is expected.

use std::time::Duration;

use tracing::{debug, info};
use wayfarer_core::config::EmbeddingConfig;
use wayfarer_core::errors::{EmbeddingError, WayfarerResult};
use wayfarer_core::models::DegradationEvent;
use wayfarer_core::traits::IEmbeddingProvider;

use crate::cache::{content_hash, L1MemoryCache};
use crate::degradation::DegradationChain;
use crate::providers;

pub struct EmbeddingEngine {
    chain: DegradationChain,
    cache: L1MemoryCache,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Build the chain from config. TF-IDF always sits last.
    pub fn new(config: EmbeddingConfig, timeout: Duration) -> Self {
        let mut chain = DegradationChain::new();
        let primary = providers::create_provider(&config, timeout);
        let primary_is_tfidf = primary.name() == "tfidf";
        chain.push(primary);
        if !primary_is_tfidf {
            chain.push(Box::new(providers::TfIdfFallback::new(config.dimensions)));
        }
        Self::with_chain(chain, config)
    }

    /// Build from an explicit chain. Used to plug in custom providers.
    pub fn with_chain(chain: DegradationChain, config: EmbeddingConfig) -> Self {
        let cache = L1MemoryCache::new(config.l1_cache_size);
        info!(
            provider = chain.active_provider_name(),
            dims = config.dimensions,
            "EmbeddingEngine initialized"
        );
        Self {
            chain,
            cache,
            config,
        }
    }

    /// Vectors from different providers live in different spaces, so the
    /// serving provider is part of the key.
    fn cache_key(provider: &str, text: &str) -> String {
        content_hash(&format!("{provider}\u{0}{text}"))
    }

    fn check_dims(&self, vec: &[f32]) -> WayfarerResult<()> {
        if vec.len() != self.config.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.dimensions,
                actual: vec.len(),
            }
            .into());
        }
        Ok(())
    }

    fn embed_uncached(&self, texts: &[String]) -> WayfarerResult<(Vec<Vec<f32>>, String)> {
        let mut out = Vec::with_capacity(texts.len());
        let mut served_by = String::new();
        for chunk in texts.chunks(self.config.batch_size.max(1)) {
            let (vecs, name) = self.chain.embed_batch(chunk)?;
            if !served_by.is_empty() && served_by != name {
                // A provider dropped out mid-batch; redo everything in one space.
                return self.chain.embed_batch(texts);
            }
            served_by = name;
            out.extend(vecs);
        }
        Ok((out, served_by))
    }

    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }

    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }

    pub fn cached_vectors(&self) -> u64 {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> WayfarerResult<Vec<f32>> {
        self.embed_attributed(text).map(|(vec, _)| vec)
    }

    fn embed_batch(&self, texts: &[String]) -> WayfarerResult<Vec<Vec<f32>>> {
        self.embed_batch_attributed(texts).map(|(vecs, _)| vecs)
    }

    fn embed_attributed(&self, text: &str) -> WayfarerResult<(Vec<f32>, String)> {
        let active = self.chain.active_provider_name().to_string();
        if let Some(vec) = self.cache.get(&Self::cache_key(&active, text)) {
            debug!(provider = %active, "embedding cache hit");
            return Ok((vec, active));
        }
        let (vec, served_by) = self.chain.embed(text)?;
        self.check_dims(&vec)?;
        self.cache.insert(Self::cache_key(&served_by, text), vec.clone());
        Ok((vec, served_by))
    }

    fn embed_batch_attributed(
        &self,
        texts: &[String],
    ) -> WayfarerResult<(Vec<Vec<f32>>, String)> {
        let active = self.chain.active_provider_name().to_string();
        let mut slots: Vec<Option<Vec<f32>>> = texts
            .iter()
            .map(|t| self.cache.get(&Self::cache_key(&active, t)))
            .collect();

        let missing: Vec<usize> = (0..texts.len()).filter(|&i| slots[i].is_none()).collect();
        debug!(
            total = texts.len(),
            cached = texts.len() - missing.len(),
            "embedding batch"
        );
        if missing.is_empty() {
            return Ok((slots.into_iter().flatten().collect(), active));
        }

        let pending: Vec<String> = missing.iter().map(|&i| texts[i].clone()).collect();
        let (vecs, served_by) = self.embed_uncached(&pending)?;
        if vecs.len() != pending.len() {
            return Err(EmbeddingError::LengthMismatch {
                names: pending.len(),
                vectors: vecs.len(),
            }
            .into());
        }

        if served_by != active && missing.len() < texts.len() {
            // Cached hits came from a provider that no longer serves.
            let (all, served_by) = self.embed_uncached(texts)?;
            for (text, vec) in texts.iter().zip(&all) {
                self.check_dims(vec)?;
                self.cache.insert(Self::cache_key(&served_by, text), vec.clone());
            }
            return Ok((all, served_by));
        }

        for (i, vec) in missing.into_iter().zip(vecs) {
            self.check_dims(&vec)?;
            self.cache.insert(Self::cache_key(&served_by, &texts[i]), vec.clone());
            slots[i] = Some(vec);
        }
        Ok((slots.into_iter().flatten().collect(), served_by))
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn name(&self) -> &str {
        self.chain.active_provider_name()
    }

    fn is_available(&self) -> bool {
        !self.chain.is_empty()
    }
}
