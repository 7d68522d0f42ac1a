//! Placeholder text for every lookup, for running without live data sources.

use wayfarer_core::errors::CollaboratorError;
use wayfarer_core::models::TravelMonth;
use wayfarer_core::traits::ITravelTools;

pub struct DemoTools;

impl ITravelTools for DemoTools {
    fn weather(&self, city: &str, month: Option<TravelMonth>) -> Result<String, CollaboratorError> {
        let when = month
            .map(|m| format!(" in {}", m.name()))
            .unwrap_or_default();
        Ok(format!(
            "[Demo] Weather for {city}{when}: mild temperatures, pack layers. (Configure a weather source for real data)"
        ))
    }

    fn attractions(&self, city: &str) -> Result<String, CollaboratorError> {
        Ok(format!(
            "[Demo] Top attractions in {city}: Museum, Park, Historic Site."
        ))
    }

    fn restaurants(&self, city: &str) -> Result<String, CollaboratorError> {
        Ok(format!(
            "[Demo] Popular restaurants in {city}: Local cuisine, International dining."
        ))
    }

    fn accommodations(&self, city: &str) -> Result<String, CollaboratorError> {
        Ok(format!(
            "[Demo] Accommodation options in {city}: Hotels, Hostels, Guesthouses."
        ))
    }

    fn transportation(&self, city: &str) -> Result<String, CollaboratorError> {
        Ok(format!(
            "[Demo] Transportation options in {city}: Metro, Bus, Taxi, Bike rental."
        ))
    }

    fn name(&self) -> &str {
        "demo"
    }
}
