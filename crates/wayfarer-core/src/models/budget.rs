use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Coarse cost category used to partition ranked search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// What the tier means for the traveller.
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "Budget-friendly options, hostels, street food, public transport",
            Self::Medium => "Mid-range hotels, mix of dining options, some private transport",
            Self::High => "Luxury accommodations, fine dining, private tours, premium experiences",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = ValidationError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::InvalidBudget {
                input: s.to_string(),
            }),
        }
    }
}

/// Classification of an accepted trip duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripLength {
    DayTrip,
    Weekend,
    Week,
    Extended,
}

impl TripLength {
    pub fn from_days(days: u32) -> Self {
        match days {
            0 | 1 => Self::DayTrip,
            2..=3 => Self::Weekend,
            4..=7 => Self::Week,
            _ => Self::Extended,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DayTrip => "day trip",
            Self::Weekend => "weekend getaway",
            Self::Week => "week-long adventure",
            Self::Extended => "extended journey",
        }
    }
}
