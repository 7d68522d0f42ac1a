//! Integration tests for the embedding engine and provider fallback.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use wayfarer_core::config::EmbeddingConfig;
use wayfarer_core::errors::{EmbeddingError, WayfarerError, WayfarerResult};
use wayfarer_core::traits::IEmbeddingProvider;
use wayfarer_embeddings::{DegradationChain, EmbeddingEngine, TfIdfFallback};

fn config(dims: usize) -> EmbeddingConfig {
    EmbeddingConfig {
        provider: "tfidf".to_string(),
        dimensions: dims,
        ..Default::default()
    }
}

/// Counts how many texts reach the provider.
struct Counting {
    inner: TfIdfFallback,
    seen: Arc<AtomicUsize>,
}

impl IEmbeddingProvider for Counting {
    fn embed(&self, text: &str) -> WayfarerResult<Vec<f32>> {
        self.seen.fetch_add(1, Ordering::SeqCst);
        self.inner.embed(text)
    }
    fn embed_batch(&self, texts: &[String]) -> WayfarerResult<Vec<Vec<f32>>> {
        self.seen.fetch_add(texts.len(), Ordering::SeqCst);
        self.inner.embed_batch(texts)
    }
    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }
    fn name(&self) -> &str {
        "counting"
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// Returns vectors of the wrong width.
struct Narrow;

impl IEmbeddingProvider for Narrow {
    fn embed(&self, _text: &str) -> WayfarerResult<Vec<f32>> {
        Ok(vec![0.5; 3])
    }
    fn embed_batch(&self, texts: &[String]) -> WayfarerResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| vec![0.5; 3]).collect())
    }
    fn dimensions(&self) -> usize {
        3
    }
    fn name(&self) -> &str {
        "narrow"
    }
    fn is_available(&self) -> bool {
        true
    }
}

// ── Caching ──────────────────────────────────────────────────────────────

#[test]
fn repeated_batches_hit_cache() {
    let seen = Arc::new(AtomicUsize::new(0));
    let mut chain = DegradationChain::new();
    chain.push(Box::new(Counting {
        inner: TfIdfFallback::new(64),
        seen: Arc::clone(&seen),
    }));
    let engine = EmbeddingEngine::with_chain(chain, config(64));

    let texts = vec!["ancient temples".to_string(), "street art".to_string()];
    let first = engine.embed_batch(&texts).unwrap();
    let second = engine.embed_batch(&texts).unwrap();

    assert_eq!(first, second);
    assert_eq!(seen.load(Ordering::SeqCst), 2);
}

#[test]
fn engine_matches_bare_provider() {
    let engine = EmbeddingEngine::new(config(128), Duration::from_secs(1));
    let bare = TfIdfFallback::new(128);
    assert_eq!(
        engine.embed("wine tasting vineyards").unwrap(),
        bare.embed("wine tasting vineyards").unwrap()
    );
}

// ── Validation ───────────────────────────────────────────────────────────

#[test]
fn wrong_width_is_rejected() {
    let mut chain = DegradationChain::new();
    chain.push(Box::new(Narrow));
    let engine = EmbeddingEngine::with_chain(chain, config(8));

    match engine.embed("anything") {
        Err(WayfarerError::Embedding(EmbeddingError::DimensionMismatch { expected, actual })) => {
            assert_eq!(expected, 8);
            assert_eq!(actual, 3);
        }
        other => panic!("expected dimension mismatch, got {other:?}"),
    }
}

// ── Provider selection ───────────────────────────────────────────────────

#[test]
fn unreachable_ollama_degrades_to_tfidf() {
    let cfg = EmbeddingConfig {
        provider: "ollama".to_string(),
        ollama_url: "http://127.0.0.1:9".to_string(),
        dimensions: 64,
        ..Default::default()
    };
    let engine = EmbeddingEngine::new(cfg, Duration::from_millis(200));
    assert_eq!(engine.active_provider(), "tfidf");
    assert_eq!(engine.embed("fjords").unwrap().len(), 64);
}

#[test]
fn unknown_provider_uses_tfidf() {
    let cfg = EmbeddingConfig {
        provider: "mystery".to_string(),
        dimensions: 32,
        ..Default::default()
    };
    let engine = EmbeddingEngine::new(cfg, Duration::from_secs(1));
    assert_eq!(engine.active_provider(), "tfidf");
}
