//! Ordered provider fallback.
//!
//! Providers are tried in priority order. When a later provider serves a
//! request the first one could not, a `DegradationEvent` is recorded.

use std::sync::Mutex;

use chrono::Utc;
use tracing::warn;
use wayfarer_core::errors::{EmbeddingError, WayfarerError, WayfarerResult};
use wayfarer_core::models::DegradationEvent;
use wayfarer_core::traits::IEmbeddingProvider;

#[derive(Default)]
pub struct DegradationChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
    events: Mutex<Vec<DegradationEvent>>,
}

impl DegradationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider at the lowest priority.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    /// Embed one text; returns the vector and the name of the provider that served it.
    pub fn embed(&self, text: &str) -> WayfarerResult<(Vec<f32>, String)> {
        self.first_success("embed", |p| p.embed(text))
    }

    /// Embed a batch with a single provider so all vectors share one space.
    pub fn embed_batch(&self, texts: &[String]) -> WayfarerResult<(Vec<Vec<f32>>, String)> {
        self.first_success("embed_batch", |p| p.embed_batch(texts))
    }

    fn first_success<T>(
        &self,
        op: &str,
        call: impl Fn(&dyn IEmbeddingProvider) -> WayfarerResult<T>,
    ) -> WayfarerResult<(T, String)> {
        let mut last_error: Option<WayfarerError> = None;

        for (i, provider) in self.providers.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match call(provider.as_ref()) {
                Ok(out) => {
                    if i > 0 {
                        self.record_fallback(provider.name(), last_error.as_ref());
                    }
                    return Ok((out, provider.name().to_string()));
                }
                Err(e) => {
                    warn!(provider = provider.name(), op, error = %e, "provider failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: format!("all {} providers exhausted", self.providers.len()),
            }
            .into()
        }))
    }

    fn record_fallback(&self, fallback: &str, cause: Option<&WayfarerError>) {
        let primary = self.providers.first().map(|p| p.name()).unwrap_or("unknown");
        let failure = match cause {
            Some(e) => format!("{primary} failed: {e}"),
            None => format!("{primary} unavailable"),
        };
        let event = DegradationEvent {
            component: "embeddings".to_string(),
            failure,
            fallback_used: fallback.to_string(),
            timestamp: Utc::now(),
        };
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }

    /// Name of the first provider that currently reports itself available.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Dimensions of the first available provider.
    pub fn active_dimensions(&self) -> Option<usize> {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.dimensions())
    }

    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(|p| p.into_inner()))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
