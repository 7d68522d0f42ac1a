//! Provider registry.
//!
//! - `ollama`: local Ollama server, used when its health check passes
//! - `tfidf`: always available

pub mod ollama_provider;
pub mod tfidf_fallback;

pub use ollama_provider::OllamaProvider;
pub use tfidf_fallback::TfIdfFallback;

use std::time::Duration;

use tracing::{info, warn};
use wayfarer_core::config::EmbeddingConfig;
use wayfarer_core::traits::IEmbeddingProvider;

/// Create the configured provider, falling back to TF-IDF when it cannot serve.
pub fn create_provider(config: &EmbeddingConfig, timeout: Duration) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "ollama" => {
            let provider = OllamaProvider::new(
                config.ollama_model.clone(),
                config.dimensions,
                config.ollama_url.clone(),
                timeout,
            );
            if provider.health_check() {
                info!(provider = "ollama", model = %config.ollama_model, "embedding provider connected");
                Box::new(provider)
            } else {
                warn!("Ollama unavailable, falling back to TF-IDF");
                Box::new(TfIdfFallback::new(config.dimensions))
            }
        }
        "tfidf" => {
            info!(provider = "tfidf", "using TF-IDF embedding provider");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
        other => {
            warn!(provider = other, "unknown embedding provider, using TF-IDF");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
    }
}
