use crate::models::Stage;

use super::{CollaboratorError, DataSourceError, EmbeddingError, ValidationError};

/// Top-level error type for the Wayfarer workspace.
#[derive(Debug, thiserror::Error)]
pub enum WayfarerError {
    #[error("data source error: {0}")]
    DataSource(#[from] DataSourceError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("no match for '{input}' among: {}", candidates.join(", "))]
    NoMatch {
        input: String,
        candidates: Vec<String>,
    },

    #[error("collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("stage out of order: expected {expected}, session is at {actual}")]
    StageOrder { expected: Stage, actual: Stage },
}

impl WayfarerError {
    /// Whether the caller can recover by supplying new input for the same stage.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NoMatch { .. })
    }
}
