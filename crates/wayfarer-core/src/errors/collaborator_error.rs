/// Failures of external collaborators (narrative generation, travel tools).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{capability} unavailable: {reason}")]
    Unavailable { capability: String, reason: String },

    #[error("{capability} failed: {reason}")]
    Failed { capability: String, reason: String },

    #[error("{capability} timed out after {secs}s")]
    Timeout { capability: String, secs: u64 },

    #[error("{capability} is not configured")]
    NotConfigured { capability: String },
}
