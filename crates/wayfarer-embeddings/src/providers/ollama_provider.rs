//! Ollama embedding provider.
//!
//! Talks to a local Ollama server over HTTP (`/api/embed`). Every request
//! carries the configured timeout; the provider stays unavailable until a
//! health check succeeds.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wayfarer_core::errors::{EmbeddingError, WayfarerResult};
use wayfarer_core::traits::IEmbeddingProvider;

pub struct OllamaProvider {
    base_url: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    available: AtomicBool,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    pub fn new(model: String, dimensions: usize, base_url: String, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            dimensions,
            timeout,
            available: AtomicBool::new(false),
        }
    }

    fn runtime() -> Option<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .ok()
    }

    /// Probe `/api/tags`; marks the provider available on success.
    pub fn health_check(&self) -> bool {
        let Some(rt) = Self::runtime() else {
            return false;
        };
        let url = format!("{}/api/tags", self.base_url);
        let result = rt.block_on(async {
            reqwest::Client::new()
                .get(&url)
                .timeout(self.timeout)
                .send()
                .await
        });

        let ok = match result {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                false
            }
        };
        self.available.store(ok, Ordering::Relaxed);
        ok
    }

    fn request(&self, texts: &[String]) -> WayfarerResult<Vec<Vec<f32>>> {
        if !self.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.name().to_string(),
            }
            .into());
        }
        let rt = Self::runtime().ok_or_else(|| EmbeddingError::InferenceFailed {
            reason: "could not start async runtime".to_string(),
        })?;

        let url = format!("{}/api/embed", self.base_url);
        let body = EmbedRequest {
            model: &self.model,
            input: texts,
        };
        let response: EmbedResponse = rt.block_on(async {
            let resp = reqwest::Client::new()
                .post(&url)
                .timeout(self.timeout)
                .json(&body)
                .send()
                .await
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("Ollama HTTP error: {e}"),
                })?;
            let status = resp.status();
            if !status.is_success() {
                let text = resp.text().await.unwrap_or_default();
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("Ollama returned {status}: {text}"),
                });
            }
            resp.json::<EmbedResponse>()
                .await
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("Ollama JSON parse error: {e}"),
                })
        })?;

        if response.embeddings.len() != texts.len() {
            return Err(EmbeddingError::LengthMismatch {
                names: texts.len(),
                vectors: response.embeddings.len(),
            }
            .into());
        }
        check_widths(response.embeddings, self.dimensions)
    }
}

/// The server's model decides the width; a mismatch with config is an error.
fn check_widths(vectors: Vec<Vec<f32>>, dimensions: usize) -> WayfarerResult<Vec<Vec<f32>>> {
    if let Some(bad) = vectors.iter().find(|v| v.len() != dimensions) {
        return Err(EmbeddingError::DimensionMismatch {
            expected: dimensions,
            actual: bad.len(),
        }
        .into());
    }
    Ok(vectors)
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> WayfarerResult<Vec<f32>> {
        self.request(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| {
                EmbeddingError::InferenceFailed {
                    reason: "empty Ollama response".to_string(),
                }
                .into()
            })
    }

    fn embed_batch(&self, texts: &[String]) -> WayfarerResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
