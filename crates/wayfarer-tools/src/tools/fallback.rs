//! Two-adapter fallback, applied per capability.

use tracing::debug;
use wayfarer_core::errors::CollaboratorError;
use wayfarer_core::models::TravelMonth;
use wayfarer_core::traits::ITravelTools;

pub struct FallbackTools {
    primary: Box<dyn ITravelTools>,
    secondary: Box<dyn ITravelTools>,
    name: String,
}

impl FallbackTools {
    pub fn new(primary: Box<dyn ITravelTools>, secondary: Box<dyn ITravelTools>) -> Self {
        let name = format!("{}_with_{}", primary.name(), secondary.name());
        Self {
            primary,
            secondary,
            name,
        }
    }

    fn either(
        &self,
        capability: &str,
        first: Result<String, CollaboratorError>,
        second: impl FnOnce() -> Result<String, CollaboratorError>,
    ) -> Result<String, CollaboratorError> {
        first.or_else(|e| {
            debug!(
                capability,
                primary = self.primary.name(),
                secondary = self.secondary.name(),
                error = %e,
                "tool lookup falling back"
            );
            second()
        })
    }
}

impl ITravelTools for FallbackTools {
    fn weather(&self, city: &str, month: Option<TravelMonth>) -> Result<String, CollaboratorError> {
        self.either("weather", self.primary.weather(city, month), || {
            self.secondary.weather(city, month)
        })
    }

    fn attractions(&self, city: &str) -> Result<String, CollaboratorError> {
        self.either("attractions", self.primary.attractions(city), || {
            self.secondary.attractions(city)
        })
    }

    fn restaurants(&self, city: &str) -> Result<String, CollaboratorError> {
        self.either("restaurants", self.primary.restaurants(city), || {
            self.secondary.restaurants(city)
        })
    }

    fn accommodations(&self, city: &str) -> Result<String, CollaboratorError> {
        self.either("accommodations", self.primary.accommodations(city), || {
            self.secondary.accommodations(city)
        })
    }

    fn transportation(&self, city: &str) -> Result<String, CollaboratorError> {
        self.either("transportation", self.primary.transportation(city), || {
            self.secondary.transportation(city)
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
