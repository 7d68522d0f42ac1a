pub mod collaborator_config;
pub mod corpus_config;
pub mod defaults;
pub mod embedding_config;
pub mod observability_config;
pub mod retrieval_config;

pub use collaborator_config::{CollaboratorConfig, NarrativeAdapter, ToolAdapter};
pub use corpus_config::{CorpusConfig, DuplicatePolicy};
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{WayfarerError, WayfarerResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WayfarerConfig {
    pub corpus: CorpusConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub collaborators: CollaboratorConfig,
    pub observability: ObservabilityConfig,
}

impl WayfarerConfig {
    /// Parse config from a TOML string. Missing sections and fields take defaults.
    pub fn from_toml(s: &str) -> WayfarerResult<Self> {
        toml::from_str(s).map_err(|e| WayfarerError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> WayfarerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| WayfarerError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }
}
