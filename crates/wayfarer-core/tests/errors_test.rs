use wayfarer_core::errors::*;
use wayfarer_core::Stage;

#[test]
fn budget_validation_names_accepted_values() {
    let err = ValidationError::InvalidBudget {
        input: "cheap".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("cheap"));
    assert!(msg.contains("low"));
    assert!(msg.contains("medium"));
    assert!(msg.contains("high"));
}

#[test]
fn no_match_lists_candidates() {
    let err = WayfarerError::NoMatch {
        input: "Berlin".into(),
        candidates: vec!["Paris, France".into(), "Kyoto, Japan".into()],
    };
    let msg = err.to_string();
    assert!(msg.contains("Berlin"));
    assert!(msg.contains("Paris, France, Kyoto, Japan"));
}

#[test]
fn stage_order_carries_both_stages() {
    let err = WayfarerError::StageOrder {
        expected: Stage::Select,
        actual: Stage::AwaitBudget,
    };
    let msg = err.to_string();
    assert!(msg.contains("select"));
    assert!(msg.contains("await_budget"));
}

// --- From impls ---

#[test]
fn data_source_error_converts() {
    let err: WayfarerError = DataSourceError::NotFound {
        path: "data/destinations.json".into(),
    }
    .into();
    assert!(matches!(err, WayfarerError::DataSource(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn validation_error_converts_and_is_recoverable() {
    let err: WayfarerError = ValidationError::EmptyInterests.into();
    assert!(err.is_recoverable());
}

#[test]
fn collaborator_error_converts_and_is_not_recoverable() {
    let err: WayfarerError = CollaboratorError::NotConfigured {
        capability: "narrative".into(),
    }
    .into();
    assert!(matches!(err, WayfarerError::Collaborator(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn embedding_error_converts() {
    let err: WayfarerError = EmbeddingError::DimensionMismatch {
        expected: 384,
        actual: 12,
    }
    .into();
    let msg = err.to_string();
    assert!(msg.contains("384"));
    assert!(msg.contains("12"));
}
