use serde::{Deserialize, Serialize};

use super::PlaceEntry;

/// Structured facts about one destination, as surfaced by the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Name of the nearest record.
    pub name: String,
    /// Squared distance between the query and the record.
    pub distance: f32,
    pub enriched_text: String,
    pub knowledge_text: String,
    /// Top attractions (possibly empty).
    pub attractions: Vec<PlaceEntry>,
    pub restaurants: Vec<PlaceEntry>,
    pub accommodations: Vec<PlaceEntry>,
    /// Cost note for the session's budget tier, when the corpus has one.
    pub budget_note: Option<String>,
    pub travel_tips: Vec<String>,
}

/// Result of one informational lookup. Each field degrades on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldOutcome {
    Available { text: String },
    Unavailable { reason: String },
}

impl FieldOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// The text, or an explicit `unavailable` marker.
    pub fn display_text(&self) -> String {
        match self {
            Self::Available { text } => text.clone(),
            Self::Unavailable { reason } => format!("unavailable ({reason})"),
        }
    }
}

/// Travel-tool lookups for the selected city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationBrief {
    pub weather: FieldOutcome,
    pub attractions: FieldOutcome,
    pub restaurants: FieldOutcome,
    pub accommodations: FieldOutcome,
    pub transportation: FieldOutcome,
}

impl DestinationBrief {
    pub fn fields(&self) -> [(&'static str, &FieldOutcome); 5] {
        [
            ("weather", &self.weather),
            ("attractions", &self.attractions),
            ("restaurants", &self.restaurants),
            ("accommodations", &self.accommodations),
            ("transportation", &self.transportation),
        ]
    }
}

/// Output of the terminal stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpReport {
    /// `None` only when the knowledge base is empty.
    pub knowledge: Option<KnowledgeEntry>,
    pub brief: DestinationBrief,
}
