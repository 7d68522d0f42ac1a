//! Deterministic day-by-day itinerary template.

use std::fmt::Write;

use wayfarer_core::errors::CollaboratorError;
use wayfarer_core::models::{NarrativeRequest, TripLength};
use wayfarer_core::traits::INarrativeGenerator;

/// Time-of-day slots each day is split into.
const SLOTS: [&str; 3] = ["Morning", "Afternoon", "Evening"];

pub struct DemoNarrator;

impl INarrativeGenerator for DemoNarrator {
    fn generate(&self, request: &NarrativeRequest) -> Result<String, CollaboratorError> {
        if request.duration_days == 0 {
            return Err(CollaboratorError::Failed {
                capability: "narrative".to_string(),
                reason: "trip has no days".to_string(),
            });
        }
        let interests: Vec<&str> = if request.interests.is_empty() {
            vec!["sightseeing"]
        } else {
            request.interests.iter().map(String::as_str).collect()
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}-day {} in {} ({} budget)",
            request.duration_days,
            TripLength::from_days(request.duration_days).label(),
            request.city,
            request.budget
        );
        let _ = writeln!(out, "Style: {}", request.budget.description());
        if let Some(month) = request.month {
            let _ = writeln!(out, "Travelling in {month}");
        }

        let mut turn = 0usize;
        for day in 1..=request.duration_days {
            let _ = writeln!(out, "\nDay {day}");
            for slot in SLOTS {
                let interest = interests[turn % interests.len()];
                turn += 1;
                let _ = writeln!(out, "  {slot}: {interest} in {}", request.city);
            }
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "demo"
    }
}

#[cfg(test)]
mod tests {
    use wayfarer_core::models::{BudgetTier, TravelMonth};

    use super::*;

    fn request(days: u32) -> NarrativeRequest {
        NarrativeRequest {
            city: "Kyoto, Japan".to_string(),
            interests: vec!["temples".to_string(), "food".to_string()],
            duration_days: days,
            budget: BudgetTier::Low,
            month: TravelMonth::try_from(4).ok(),
        }
    }

    #[test]
    fn one_section_per_day() {
        let text = DemoNarrator.generate(&request(3)).unwrap();
        assert!(text.contains("Day 1"));
        assert!(text.contains("Day 3"));
        assert!(!text.contains("Day 4"));
        assert!(text.contains("April"));
        assert!(text.contains("temples in Kyoto, Japan"));
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            DemoNarrator.generate(&request(2)).unwrap(),
            DemoNarrator.generate(&request(2)).unwrap()
        );
    }

    #[test]
    fn zero_days_fails() {
        assert!(DemoNarrator.generate(&request(0)).is_err());
    }
}
