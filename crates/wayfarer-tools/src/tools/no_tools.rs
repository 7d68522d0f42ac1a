use wayfarer_core::errors::CollaboratorError;
use wayfarer_core::models::TravelMonth;
use wayfarer_core::traits::ITravelTools;

/// Every lookup fails with `NotConfigured`.
pub struct NoTools;

fn not_configured(capability: &str) -> Result<String, CollaboratorError> {
    Err(CollaboratorError::NotConfigured {
        capability: capability.to_string(),
    })
}

impl ITravelTools for NoTools {
    fn weather(&self, _city: &str, _month: Option<TravelMonth>) -> Result<String, CollaboratorError> {
        not_configured("weather")
    }

    fn attractions(&self, _city: &str) -> Result<String, CollaboratorError> {
        not_configured("attractions")
    }

    fn restaurants(&self, _city: &str) -> Result<String, CollaboratorError> {
        not_configured("restaurants")
    }

    fn accommodations(&self, _city: &str) -> Result<String, CollaboratorError> {
        not_configured("accommodations")
    }

    fn transportation(&self, _city: &str) -> Result<String, CollaboratorError> {
        not_configured("transportation")
    }

    fn name(&self) -> &str {
        "none"
    }
}
