//! Planner: the shared, read-only machinery behind every session.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use wayfarer_core::config::{RetrievalConfig, WayfarerConfig};
use wayfarer_core::errors::WayfarerResult;
use wayfarer_core::models::DegradationEvent;
use wayfarer_core::traits::{IEmbeddingProvider, INarrativeGenerator, ITravelTools};
use wayfarer_corpus::{Corpus, CorpusLoader};
use wayfarer_embeddings::EmbeddingEngine;
use wayfarer_retrieval::{
    BudgetPartitioner, DestinationCatalog, IndexCache, KnowledgeBase, RefinementSelector,
};

/// Indexes, encoder and collaborators, built once and shared by `Arc`.
///
/// Stage methods live in `stages.rs`; each takes the session's state by
/// `&mut` and leaves it untouched on error.
pub struct Planner {
    pub(crate) catalog: Arc<DestinationCatalog>,
    pub(crate) knowledge: Arc<KnowledgeBase>,
    pub(crate) engine: Arc<EmbeddingEngine>,
    pub(crate) index_cache: Arc<IndexCache>,
    pub(crate) tools: Arc<dyn ITravelTools>,
    pub(crate) narrator: Arc<dyn INarrativeGenerator>,
    pub(crate) partitioner: BudgetPartitioner,
    pub(crate) refiner: RefinementSelector,
    pub(crate) retrieval: RetrievalConfig,
}

impl Planner {
    /// Load the configured corpus and build everything from it.
    pub fn from_config(config: &WayfarerConfig) -> WayfarerResult<Self> {
        let corpus = CorpusLoader::load_configured(&config.corpus)?;
        Self::from_corpus(corpus, config)
    }

    /// Build over an already loaded corpus.
    pub fn from_corpus(corpus: Corpus, config: &WayfarerConfig) -> WayfarerResult<Self> {
        let cache = Arc::new(IndexCache::from_config(&config.retrieval));
        Self::from_corpus_with_cache(corpus, config, cache)
    }

    /// Reload the configured corpus, reusing this planner's index cache so
    /// unchanged content is not re-encoded.
    pub fn reload(&self, config: &WayfarerConfig) -> WayfarerResult<Self> {
        let corpus = CorpusLoader::load_configured(&config.corpus)?;
        Self::from_corpus_with_cache(corpus, config, Arc::clone(&self.index_cache))
    }

    /// Build over a corpus, memoising index builds in `cache`.
    pub fn from_corpus_with_cache(
        corpus: Corpus,
        config: &WayfarerConfig,
        cache: Arc<IndexCache>,
    ) -> WayfarerResult<Self> {
        let corpus = Arc::new(corpus);
        let engine = Arc::new(EmbeddingEngine::new(
            config.embedding.clone(),
            Duration::from_secs(config.collaborators.timeout_secs),
        ));
        let encoder: Arc<dyn IEmbeddingProvider> = engine.clone();

        let catalog = DestinationCatalog::build(Arc::clone(&corpus), Arc::clone(&encoder), &cache)?;
        let knowledge = KnowledgeBase::build(
            Arc::clone(&corpus),
            encoder,
            &cache,
            config.retrieval.knowledge_k,
        )?;
        let tools = wayfarer_tools::create_tools(&config.collaborators, Arc::clone(&corpus));
        let narrator = wayfarer_tools::create_narrator(&config.collaborators);

        info!(
            destinations = corpus.len(),
            fingerprint = %corpus.fingerprint(),
            encoder = engine.active_provider(),
            "planner ready"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            knowledge: Arc::new(knowledge),
            engine,
            index_cache: cache,
            tools,
            narrator,
            partitioner: BudgetPartitioner::new(),
            refiner: RefinementSelector::from_config(&config.retrieval),
            retrieval: config.retrieval.clone(),
        })
    }

    /// Swap the travel-tool adapter.
    pub fn with_tools(mut self, tools: Arc<dyn ITravelTools>) -> Self {
        self.tools = tools;
        self
    }

    /// Swap the narrative adapter.
    pub fn with_narrator(mut self, narrator: Arc<dyn INarrativeGenerator>) -> Self {
        self.narrator = narrator;
        self
    }

    pub fn catalog(&self) -> &DestinationCatalog {
        &self.catalog
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn index_cache(&self) -> &Arc<IndexCache> {
        &self.index_cache
    }

    pub fn corpus(&self) -> &Corpus {
        self.catalog.corpus()
    }

    /// Encoder fallbacks since the last call.
    pub fn degradation_events(&self) -> Vec<DegradationEvent> {
        self.engine.drain_degradation_events()
    }
}
