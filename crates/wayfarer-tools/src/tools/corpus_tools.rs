//! Lookups answered from the loaded corpus.

use std::sync::Arc;

use wayfarer_core::errors::CollaboratorError;
use wayfarer_core::models::{PlaceCategory, TravelMonth};
use wayfarer_core::traits::ITravelTools;
use wayfarer_corpus::Corpus;

/// Places listed per lookup.
const LISTED: usize = 5;

pub struct CorpusTools {
    corpus: Arc<Corpus>,
}

impl CorpusTools {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    fn listing(&self, city: &str, category: PlaceCategory) -> Result<String, CollaboratorError> {
        let capability = category.as_str();
        let record = self
            .corpus
            .find_ignore_case(city)
            .ok_or_else(|| CollaboratorError::Unavailable {
                capability: capability.to_string(),
                reason: format!("{city} is not in the corpus"),
            })?;
        let places = record.places(category);
        if places.is_empty() {
            return Err(CollaboratorError::Unavailable {
                capability: capability.to_string(),
                reason: format!("no {capability} recorded for {city}"),
            });
        }

        let heading = match category {
            PlaceCategory::Attraction => "Top attractions",
            PlaceCategory::Restaurant => "Popular restaurants",
            PlaceCategory::Accommodation => "Accommodation options",
        };
        let mut out = format!("{heading} in {}:\n", record.name);
        for (i, place) in places.iter().take(LISTED).enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, place.display_line()));
        }
        Ok(out)
    }
}

impl ITravelTools for CorpusTools {
    fn weather(&self, _city: &str, _month: Option<TravelMonth>) -> Result<String, CollaboratorError> {
        Err(CollaboratorError::Unavailable {
            capability: "weather".to_string(),
            reason: "the corpus carries no weather data".to_string(),
        })
    }

    fn attractions(&self, city: &str) -> Result<String, CollaboratorError> {
        self.listing(city, PlaceCategory::Attraction)
    }

    fn restaurants(&self, city: &str) -> Result<String, CollaboratorError> {
        self.listing(city, PlaceCategory::Restaurant)
    }

    fn accommodations(&self, city: &str) -> Result<String, CollaboratorError> {
        self.listing(city, PlaceCategory::Accommodation)
    }

    fn transportation(&self, _city: &str) -> Result<String, CollaboratorError> {
        Err(CollaboratorError::Unavailable {
            capability: "transportation".to_string(),
            reason: "the corpus carries no transport data".to_string(),
        })
    }

    fn name(&self) -> &str {
        "corpus"
    }
}
