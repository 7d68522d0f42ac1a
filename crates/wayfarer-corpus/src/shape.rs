//! Raw on-disk record shapes and shape detection.

use serde::Deserialize;
use wayfarer_core::errors::{DataSourceError, WayfarerResult};
use wayfarer_core::models::{BudgetNotes, PlaceCategory, PlaceEntry};

/// Which of the two accepted source layouts a corpus uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusShape {
    /// Records carry attraction/restaurant/accommodation lists.
    Dynamic,
    /// Records carry only `name` and `description`.
    Fallback,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDestination {
    pub name: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub description: Option<String>,
    pub attractions: Option<Vec<RawPlace>>,
    pub restaurants: Option<Vec<RawPlace>>,
    pub accommodations: Option<Vec<RawPlace>>,
    pub average_budget_tiers: Option<RawBudgetTiers>,
    pub travel_tips: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPlace {
    pub name: Option<String>,
    pub rating: Option<f64>,
    #[serde(alias = "price_level")]
    pub price_level_google: Option<u8>,
    pub vicinity: Option<String>,
    pub cuisine: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBudgetTiers {
    pub low: Option<String>,
    pub medium: Option<String>,
    pub high: Option<String>,
}

impl RawDestination {
    fn has_place_lists(&self) -> bool {
        self.attractions.is_some() || self.restaurants.is_some() || self.accommodations.is_some()
    }
}

/// Decide the shape of a parsed corpus.
///
/// Any record with a place list makes the corpus dynamic. Otherwise every
/// record must have both `name` and `description`.
pub(crate) fn detect(records: &[RawDestination]) -> WayfarerResult<CorpusShape> {
    if records.iter().any(RawDestination::has_place_lists) {
        return Ok(CorpusShape::Dynamic);
    }
    if let Some(position) = records
        .iter()
        .position(|r| r.name.is_none() || r.description.is_none())
    {
        return Err(DataSourceError::UnrecognizedShape {
            reason: format!(
                "record at position {position} lacks name/description and no record has place lists"
            ),
        }
        .into());
    }
    Ok(CorpusShape::Fallback)
}

/// Upstream place types that say nothing about the place itself.
const GENERIC_TYPES: [&str; 6] = [
    "attraction",
    "dining",
    "restaurant",
    "lodging",
    "point_of_interest",
    "establishment",
];

impl RawPlace {
    /// Convert to a `PlaceEntry`; nameless places are dropped.
    pub(crate) fn into_entry(self, category: PlaceCategory) -> Option<PlaceEntry> {
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        let detail = match category {
            PlaceCategory::Attraction => None,
            PlaceCategory::Restaurant => self.cuisine,
            PlaceCategory::Accommodation => self.kind,
        }
        .filter(|d| !d.is_empty() && !GENERIC_TYPES.contains(&d.as_str()));
        Some(PlaceEntry {
            name,
            rating: self.rating,
            price_level: self.price_level_google,
            locality: self.vicinity,
            detail,
        })
    }
}

pub(crate) fn convert_places(raw: Option<Vec<RawPlace>>, category: PlaceCategory) -> Vec<PlaceEntry> {
    raw.unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.into_entry(category))
        .collect()
}

impl From<RawBudgetTiers> for BudgetNotes {
    fn from(raw: RawBudgetTiers) -> Self {
        let keep = |s: Option<String>| s.filter(|s| !s.is_empty());
        Self {
            low: keep(raw.low),
            medium: keep(raw.medium),
            high: keep(raw.high),
        }
    }
}

/// Country from a `"City, Country"` identifier; empty when there is no comma.
pub(crate) fn country_from_name(name: &str) -> String {
    name.split_once(',')
        .map(|(_, country)| country.trim().to_string())
        .unwrap_or_default()
}
