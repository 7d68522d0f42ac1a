//! The suggestion index over the corpus's enriched texts.

use std::sync::Arc;

use wayfarer_core::errors::WayfarerResult;
use wayfarer_core::models::DestinationRecord;
use wayfarer_core::traits::IEmbeddingProvider;
use wayfarer_corpus::Corpus;

use crate::index::{EmbeddingIndex, IndexCache, Neighbor};

/// Corpus records plus their enriched-text index, sharing one encoder.
pub struct DestinationCatalog {
    corpus: Arc<Corpus>,
    index: Arc<EmbeddingIndex>,
    encoder: Arc<dyn IEmbeddingProvider>,
}

impl DestinationCatalog {
    pub fn build(
        corpus: Arc<Corpus>,
        encoder: Arc<dyn IEmbeddingProvider>,
        cache: &IndexCache,
    ) -> WayfarerResult<Self> {
        let index =
            cache.get_or_build(encoder.as_ref(), &corpus.names(), &corpus.enriched_texts())?;
        Ok(Self {
            corpus,
            index,
            encoder,
        })
    }

    pub fn search(&self, query: &str, k: usize) -> WayfarerResult<Vec<Neighbor>> {
        self.index.query(self.encoder.as_ref(), query, k)
    }

    /// Identifiers of the `k` nearest records, closest first.
    pub fn ranked_names(&self, query: &str, k: usize) -> WayfarerResult<Vec<String>> {
        Ok(self
            .search(query, k)?
            .into_iter()
            .filter_map(|n| self.index.name(n.index).map(str::to_string))
            .collect())
    }

    pub fn record(&self, name: &str) -> Option<&DestinationRecord> {
        self.corpus.get(name)
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn index(&self) -> &Arc<EmbeddingIndex> {
        &self.index
    }

    pub fn encoder(&self) -> &Arc<dyn IEmbeddingProvider> {
        &self.encoder
    }
}
