//! What each stage reports back to the presentation layer.

use std::fmt::Write;

use serde::Serialize;
use wayfarer_core::models::{BudgetTier, FollowUpReport, TravelMonth, TripLength};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageReport {
    BudgetAccepted {
        tier: BudgetTier,
        description: String,
    },
    DurationAccepted {
        days: u32,
        length: TripLength,
    },
    InterestsAccepted {
        interests: Vec<String>,
    },
    Suggestions {
        candidates: Vec<String>,
    },
    Shortlist {
        provisional: String,
        shortlist: Vec<String>,
    },
    Selected {
        city: String,
    },
    Itinerary {
        text: String,
    },
    FollowUp {
        report: FollowUpReport,
    },
    TravelMonthSet {
        month: TravelMonth,
    },
}

impl StageReport {
    /// An empty suggestion list leaves the session at `Select` with nothing
    /// to pick; only a reset moves it forward.
    pub fn requires_restart(&self) -> bool {
        matches!(self, Self::Suggestions { candidates } if candidates.is_empty())
    }

    /// Text logged as the assistant's reply.
    pub fn message(&self) -> String {
        match self {
            Self::BudgetAccepted { tier, description } => {
                format!("Budget set to {tier}: {description}.")
            }
            Self::DurationAccepted { days, length } => {
                format!("Planning a {days}-day {}.", length.label())
            }
            Self::InterestsAccepted { interests } => {
                format!("Interests noted: {}.", interests.join(", "))
            }
            Self::Suggestions { candidates } if candidates.is_empty() => {
                "No destinations matched those interests at this budget. \
                 Start a new trip to try again."
                    .to_string()
            }
            Self::Suggestions { candidates } => {
                format!("Suggested destinations: {}.", candidates.join(", "))
            }
            Self::Shortlist {
                provisional,
                shortlist,
            } => format!(
                "Based on {provisional}, you might also consider: {}.",
                shortlist.join(", ")
            ),
            Self::Selected { city } => format!("Destination selected: {city}."),
            Self::Itinerary { text } => text.clone(),
            Self::FollowUp { report } => render_follow_up(report),
            Self::TravelMonthSet { month } => format!("Travel month set to {month}."),
        }
    }
}

pub fn render_follow_up(report: &FollowUpReport) -> String {
    let mut out = String::new();
    match &report.knowledge {
        Some(entry) => {
            let _ = writeln!(out, "About {}: {}", entry.name, entry.enriched_text);
            for (label, places) in [
                ("Attractions", &entry.attractions),
                ("Restaurants", &entry.restaurants),
                ("Accommodations", &entry.accommodations),
            ] {
                if places.is_empty() {
                    let _ = writeln!(out, "{label}: none recorded");
                    continue;
                }
                let _ = writeln!(out, "{label}:");
                for place in places {
                    let _ = writeln!(out, "  - {}", place.display_line());
                }
            }
            if let Some(note) = &entry.budget_note {
                let _ = writeln!(out, "Typical cost: {note}");
            }
            for tip in &entry.travel_tips {
                let _ = writeln!(out, "Tip: {tip}");
            }
        }
        None => {
            let _ = writeln!(out, "No knowledge base entry available.");
        }
    }
    for (field, outcome) in report.brief.fields() {
        let _ = writeln!(out, "{field}: {}", outcome.display_text());
    }
    out
}
