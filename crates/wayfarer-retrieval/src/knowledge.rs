//! Name-keyed fact lookup for a selected destination.
//!
//! A second index over each record's knowledge text, which leads with the
//! record name, so a bare city name lands on its own record.

use std::sync::Arc;

use tracing::debug;
use wayfarer_core::constants::{
    KNOWLEDGE_ACCOMMODATIONS, KNOWLEDGE_ATTRACTIONS, KNOWLEDGE_RESTAURANTS,
};
use wayfarer_core::errors::WayfarerResult;
use wayfarer_core::models::{BudgetTier, KnowledgeEntry, PlaceEntry};
use wayfarer_core::traits::IEmbeddingProvider;
use wayfarer_corpus::Corpus;

use crate::index::{EmbeddingIndex, IndexCache};

pub struct KnowledgeBase {
    corpus: Arc<Corpus>,
    index: Arc<EmbeddingIndex>,
    encoder: Arc<dyn IEmbeddingProvider>,
    k: usize,
}

impl KnowledgeBase {
    pub fn build(
        corpus: Arc<Corpus>,
        encoder: Arc<dyn IEmbeddingProvider>,
        cache: &IndexCache,
        k: usize,
    ) -> WayfarerResult<Self> {
        let index =
            cache.get_or_build(encoder.as_ref(), &corpus.names(), &corpus.knowledge_texts())?;
        Ok(Self {
            corpus,
            index,
            encoder,
            k: k.max(1),
        })
    }

    /// Facts for the record nearest to `city`. `None` only for an empty corpus.
    pub fn lookup(
        &self,
        city: &str,
        budget: Option<BudgetTier>,
    ) -> WayfarerResult<Option<KnowledgeEntry>> {
        let hits = self.index.query(self.encoder.as_ref(), city, self.k)?;
        let Some(nearest) = hits.first() else {
            return Ok(None);
        };
        let Some(record) = self.corpus.records().get(nearest.index) else {
            return Ok(None);
        };
        debug!(query = city, matched = %record.name, distance = nearest.distance, "knowledge lookup");

        Ok(Some(KnowledgeEntry {
            name: record.name.clone(),
            distance: nearest.distance,
            enriched_text: record.enriched_text.clone(),
            knowledge_text: record.knowledge_text.clone(),
            attractions: top(&record.attractions, KNOWLEDGE_ATTRACTIONS),
            restaurants: top(&record.restaurants, KNOWLEDGE_RESTAURANTS),
            accommodations: top(&record.accommodations, KNOWLEDGE_ACCOMMODATIONS),
            budget_note: budget
                .and_then(|tier| record.budget_notes.for_tier(tier))
                .map(str::to_string),
            travel_tips: record.travel_tips.clone(),
        }))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn top(places: &[PlaceEntry], n: usize) -> Vec<PlaceEntry> {
    places.iter().take(n).cloned().collect()
}
