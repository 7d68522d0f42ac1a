/// Embedding and index errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("index length mismatch: {names} names, {vectors} vectors")]
    LengthMismatch { names: usize, vectors: usize },

    #[error("query encoded by {query}, index built by {index}")]
    ProviderMismatch { index: String, query: String },

    #[error("index build failed: {reason}")]
    IndexBuildFailed { reason: String },
}
