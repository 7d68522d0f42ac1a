//! Itinerary writers.

pub mod demo_narrator;

pub use demo_narrator::DemoNarrator;

use std::sync::Arc;

use tracing::info;
use wayfarer_core::config::{CollaboratorConfig, NarrativeAdapter};
use wayfarer_core::errors::CollaboratorError;
use wayfarer_core::models::NarrativeRequest;
use wayfarer_core::traits::INarrativeGenerator;

/// Placeholder when no generator is configured: every request fails.
pub struct UnconfiguredNarrator;

impl INarrativeGenerator for UnconfiguredNarrator {
    fn generate(&self, _request: &NarrativeRequest) -> Result<String, CollaboratorError> {
        Err(CollaboratorError::NotConfigured {
            capability: "narrative".to_string(),
        })
    }

    fn name(&self) -> &str {
        "none"
    }
}

pub fn create_narrator(config: &CollaboratorConfig) -> Arc<dyn INarrativeGenerator> {
    let narrator: Arc<dyn INarrativeGenerator> = match config.narrative {
        NarrativeAdapter::Demo => Arc::new(DemoNarrator),
        NarrativeAdapter::None => Arc::new(UnconfiguredNarrator),
    };
    info!(adapter = narrator.name(), "narrative generator ready");
    narrator
}
