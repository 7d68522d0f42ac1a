use proptest::prelude::*;
use wayfarer_core::models::*;

#[test]
fn budget_parses_case_insensitively() {
    assert_eq!("LOW".parse::<BudgetTier>().unwrap(), BudgetTier::Low);
    assert_eq!(" Medium ".parse::<BudgetTier>().unwrap(), BudgetTier::Medium);
    assert_eq!("high".parse::<BudgetTier>().unwrap(), BudgetTier::High);
}

#[test]
fn budget_rejects_unknown_tier() {
    assert!("cheap".parse::<BudgetTier>().is_err());
    assert!("".parse::<BudgetTier>().is_err());
}

#[test]
fn trip_length_buckets() {
    assert_eq!(TripLength::from_days(1), TripLength::DayTrip);
    assert_eq!(TripLength::from_days(3), TripLength::Weekend);
    assert_eq!(TripLength::from_days(7), TripLength::Week);
    assert_eq!(TripLength::from_days(8), TripLength::Extended);
}

#[test]
fn month_parses_names() {
    let m: TravelMonth = "july".parse().unwrap();
    assert_eq!(m.number(), 7);
    assert_eq!(m.name(), "July");
    assert!("Juli".parse::<TravelMonth>().is_err());
}

#[test]
fn month_deserialize_rejects_out_of_range() {
    assert!(serde_json::from_str::<TravelMonth>("13").is_err());
    assert!(serde_json::from_str::<TravelMonth>("0").is_err());
    assert_eq!(serde_json::from_str::<TravelMonth>("12").unwrap().name(), "December");
}

#[test]
fn stage_sequence_is_linear() {
    let mut stage = Stage::AwaitBudget;
    let mut seen = vec![stage];
    while stage != Stage::Complete {
        stage = stage.next();
        seen.push(stage);
    }
    assert_eq!(
        seen,
        vec![
            Stage::AwaitBudget,
            Stage::AwaitDuration,
            Stage::AwaitInterests,
            Stage::Suggest,
            Stage::Select,
            Stage::ConfirmSelection,
            Stage::Itinerary,
            Stage::KnowledgeFollowUp,
            Stage::Complete,
        ]
    );
    assert_eq!(Stage::Complete.next(), Stage::Complete);
}

#[test]
fn new_state_is_empty() {
    let state = PlanningState::new();
    assert_eq!(state.stage, Stage::AwaitBudget);
    assert!(state.messages().is_empty());
    assert!(state.budget.is_none());
    assert!(state.selected_city.is_none());
    assert!(state.summary().is_none());
}

#[test]
fn opening_request_is_logged() {
    let state = PlanningState::with_opening("I want to plan a trip");
    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.messages()[0].role, Role::Human);
}

#[test]
fn summary_renders_decisions() {
    let mut state = PlanningState::new();
    state.budget = Some(BudgetTier::High);
    state.duration_days = Some(5);
    state.interests = vec!["art".into(), "food".into()];
    state.selected_city = Some("Paris, France".into());
    let summary = state.summary().unwrap().to_string();
    assert!(summary.contains("Destination: Paris, France"));
    assert!(summary.contains("Duration: 5 days"));
    assert!(summary.contains("Budget: high"));
    assert!(summary.contains("Interests: art, food"));
}

#[test]
fn place_line_falls_back_to_na_rating() {
    let place = PlaceEntry {
        name: "Fushimi Inari".into(),
        rating: None,
        price_level: None,
        locality: Some("Fushimi Ward".into()),
        detail: None,
    };
    assert_eq!(place.display_line(), "Fushimi Inari (Rating: N/A) - Fushimi Ward");
}

#[test]
fn field_outcome_marks_unavailable() {
    let outcome = FieldOutcome::Unavailable {
        reason: "weather timed out".into(),
    };
    assert!(!outcome.is_available());
    assert!(outcome.display_text().starts_with("unavailable"));
}

proptest! {
    #[test]
    fn budget_parse_ignores_case(idx in 0usize..3, mask in proptest::collection::vec(any::<bool>(), 6)) {
        let tier = BudgetTier::ALL[idx];
        let mixed: String = tier
            .as_str()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(mixed.parse::<BudgetTier>().unwrap(), tier);
    }
}
