use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recorded whenever a fallback served a request the primary could not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
