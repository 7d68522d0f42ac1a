//! Integration tests for tool and narrative adapters over fixture corpora.

use std::sync::Arc;

use wayfarer_core::config::{CollaboratorConfig, DuplicatePolicy, NarrativeAdapter, ToolAdapter};
use wayfarer_core::errors::CollaboratorError;
use wayfarer_core::models::{BudgetTier, NarrativeRequest, TravelMonth};
use wayfarer_core::traits::ITravelTools;
use wayfarer_corpus::{Corpus, CorpusLoader};
use wayfarer_tools::{create_narrator, create_tools, CorpusTools, NoTools};

fn corpus() -> Arc<Corpus> {
    let loader = CorpusLoader::new(DuplicatePolicy::KeepFirst);
    Arc::new(
        loader
            .load_path(test_fixtures::fixture_path(test_fixtures::DYNAMIC_CORPUS))
            .unwrap(),
    )
}

fn config(tools: ToolAdapter, narrative: NarrativeAdapter) -> CollaboratorConfig {
    CollaboratorConfig {
        tools,
        narrative,
        ..Default::default()
    }
}

// ── Corpus adapter ───────────────────────────────────────────────────────

#[test]
fn corpus_lists_top_five_attractions() {
    let tools = CorpusTools::new(corpus());
    let text = tools.attractions("kyoto, japan").unwrap();
    assert!(text.starts_with("Top attractions in Kyoto, Japan:"));
    assert!(text.contains("  1. Kinkaku-ji (Rating: "));
    assert!(text.contains("  5. "));
    assert!(!text.contains("  6. "));
}

#[test]
fn corpus_reports_empty_lists_as_unavailable() {
    let tools = CorpusTools::new(corpus());
    assert!(matches!(
        tools.attractions("Reykjavik, Iceland"),
        Err(CollaboratorError::Unavailable { .. })
    ));
    assert!(tools.restaurants("Reykjavik, Iceland").is_ok());
}

#[test]
fn corpus_has_no_weather_or_transport() {
    let tools = CorpusTools::new(corpus());
    assert!(tools.weather("Paris, France", None).is_err());
    assert!(tools.transportation("Paris, France").is_err());
}

#[test]
fn unknown_city_is_unavailable() {
    let tools = CorpusTools::new(corpus());
    let err = tools.accommodations("Atlantis").unwrap_err();
    assert!(err.to_string().contains("Atlantis"));
}

// ── Adapter selection ────────────────────────────────────────────────────

#[test]
fn corpus_with_demo_fills_gaps_per_capability() {
    let tools = create_tools(
        &config(ToolAdapter::CorpusWithDemo, NarrativeAdapter::Demo),
        corpus(),
    );
    assert_eq!(tools.name(), "corpus_with_demo");

    let attractions = tools.attractions("Kyoto, Japan").unwrap();
    assert!(!attractions.starts_with("[Demo]"));

    let reykjavik = tools.attractions("Reykjavik, Iceland").unwrap();
    assert!(reykjavik.starts_with("[Demo]"));

    let march = TravelMonth::try_from(3).unwrap();
    assert!(tools.weather("Kyoto, Japan", Some(march)).unwrap().contains("March"));
}

#[test]
fn none_adapter_is_not_configured() {
    let tools = create_tools(&config(ToolAdapter::None, NarrativeAdapter::Demo), corpus());
    assert_eq!(tools.name(), "none");
    assert_eq!(
        NoTools.transportation("Rome, Italy"),
        Err(CollaboratorError::NotConfigured {
            capability: "transportation".to_string()
        })
    );
    assert!(tools.attractions("Rome, Italy").is_err());
}

#[test]
fn demo_adapter_answers_everything() {
    let tools = create_tools(&config(ToolAdapter::Demo, NarrativeAdapter::Demo), corpus());
    for city in ["Kyoto, Japan", "Atlantis"] {
        assert!(tools.weather(city, None).is_ok());
        assert!(tools.attractions(city).is_ok());
        assert!(tools.restaurants(city).is_ok());
        assert!(tools.accommodations(city).is_ok());
        assert!(tools.transportation(city).is_ok());
    }
}

// ── Narrative ────────────────────────────────────────────────────────────

fn request() -> NarrativeRequest {
    NarrativeRequest {
        city: "Rome, Italy".to_string(),
        interests: vec!["history".to_string()],
        duration_days: 2,
        budget: BudgetTier::Medium,
        month: None,
    }
}

#[test]
fn demo_narrator_writes_itinerary() {
    let narrator = create_narrator(&config(ToolAdapter::Demo, NarrativeAdapter::Demo));
    let text = narrator.generate(&request()).unwrap();
    assert!(text.contains("Rome, Italy"));
    assert!(text.contains("Day 2"));
}

#[test]
fn unconfigured_narrator_fails() {
    let narrator = create_narrator(&config(ToolAdapter::Demo, NarrativeAdapter::None));
    assert_eq!(
        narrator.generate(&request()),
        Err(CollaboratorError::NotConfigured {
            capability: "narrative".to_string()
        })
    );
}
