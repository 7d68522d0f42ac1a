mod collaborator_error;
mod data_source_error;
mod embedding_error;
mod validation_error;
mod wayfarer_error;

pub use collaborator_error::CollaboratorError;
pub use data_source_error::DataSourceError;
pub use embedding_error::EmbeddingError;
pub use validation_error::ValidationError;
pub use wayfarer_error::WayfarerError;

/// Convenience alias used throughout the workspace.
pub type WayfarerResult<T> = Result<T, WayfarerError>;
