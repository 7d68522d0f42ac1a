use crate::errors::CollaboratorError;
use crate::models::NarrativeRequest;

/// Writes the free-text itinerary for a chosen destination.
pub trait INarrativeGenerator: Send + Sync {
    /// Produce itinerary text. The caller stores it verbatim.
    fn generate(&self, request: &NarrativeRequest) -> Result<String, CollaboratorError>;

    /// Human-readable adapter name.
    fn name(&self) -> &str;
}
