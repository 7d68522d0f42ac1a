/// Corpus loading errors. Fatal to session start.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("corpus not found: {path}")]
    NotFound { path: String },

    #[error("corpus unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("corpus malformed: {reason}")]
    Malformed { reason: String },

    #[error("corpus shape not recognized: {reason}")]
    UnrecognizedShape { reason: String },

    #[error("record at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("duplicate destination name: {name}")]
    DuplicateName { name: String },
}
