use crate::errors::CollaboratorError;
use crate::models::TravelMonth;

/// Informational lookups about a destination, one method per capability.
///
/// Every method is independent: a failure in one must not affect the others.
pub trait ITravelTools: Send + Sync {
    fn weather(&self, city: &str, month: Option<TravelMonth>) -> Result<String, CollaboratorError>;

    fn attractions(&self, city: &str) -> Result<String, CollaboratorError>;

    fn restaurants(&self, city: &str) -> Result<String, CollaboratorError>;

    fn accommodations(&self, city: &str) -> Result<String, CollaboratorError>;

    fn transportation(&self, city: &str) -> Result<String, CollaboratorError>;

    /// Human-readable adapter name.
    fn name(&self) -> &str;
}
