use serde::{Deserialize, Serialize};

use super::BudgetTier;

/// Which structured list a place belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Attraction,
    Restaurant,
    Accommodation,
}

impl PlaceCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attraction => "attractions",
            Self::Restaurant => "restaurants",
            Self::Accommodation => "accommodations",
        }
    }
}

/// A point of interest attached to a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceEntry {
    pub name: String,
    /// Rating on the upstream 0–5 scale, when known.
    pub rating: Option<f64>,
    /// Upstream price level (1 inexpensive .. 4 very expensive).
    pub price_level: Option<u8>,
    /// Neighbourhood or street address.
    pub locality: Option<String>,
    /// Cuisine for restaurants, lodging type for accommodations.
    pub detail: Option<String>,
}

impl PlaceEntry {
    /// `"Name (Rating: 4.5) - locality"`, with `N/A` for a missing rating.
    pub fn display_line(&self) -> String {
        let rating = self
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let tail = self
            .detail
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.locality.as_deref())
            .unwrap_or("");
        format!("{} (Rating: {rating}) - {tail}", self.name)
    }
}

/// Per-tier daily cost notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetNotes {
    pub low: Option<String>,
    pub medium: Option<String>,
    pub high: Option<String>,
}

impl BudgetNotes {
    pub fn for_tier(&self, tier: BudgetTier) -> Option<&str> {
        match tier {
            BudgetTier::Low => self.low.as_deref(),
            BudgetTier::Medium => self.medium.as_deref(),
            BudgetTier::High => self.high.as_deref(),
        }
    }
}

/// A normalized destination. Built once by the corpus loader, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    /// Unique identifier within the corpus, e.g. `"Kyoto, Japan"`.
    pub name: String,
    pub country: String,
    pub country_code: Option<String>,
    pub description: String,
    /// Description plus appended attraction/dining/lodging sentences; what the
    /// suggestion index embeds.
    pub enriched_text: String,
    /// Name-prefixed summary; what the knowledge base embeds.
    pub knowledge_text: String,
    pub attractions: Vec<PlaceEntry>,
    pub restaurants: Vec<PlaceEntry>,
    pub accommodations: Vec<PlaceEntry>,
    pub budget_notes: BudgetNotes,
    pub travel_tips: Vec<String>,
}

impl DestinationRecord {
    pub fn places(&self, category: PlaceCategory) -> &[PlaceEntry] {
        match category {
            PlaceCategory::Attraction => &self.attractions,
            PlaceCategory::Restaurant => &self.restaurants,
            PlaceCategory::Accommodation => &self.accommodations,
        }
    }
}
