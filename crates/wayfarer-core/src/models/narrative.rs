use serde::{Deserialize, Serialize};

use super::{BudgetTier, TravelMonth};

/// Everything the narrative collaborator receives for one itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    pub city: String,
    pub interests: Vec<String>,
    pub duration_days: u32,
    pub budget: BudgetTier,
    pub month: Option<TravelMonth>,
}
