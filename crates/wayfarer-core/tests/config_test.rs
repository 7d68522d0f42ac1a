use wayfarer_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = WayfarerConfig::from_toml("").unwrap();

    // Corpus defaults
    assert_eq!(config.corpus.primary_path, "travel_data/traveldata.json");
    assert_eq!(config.corpus.fallback_path, "data/destinations.json");
    assert_eq!(config.corpus.duplicate_policy, DuplicatePolicy::KeepFirst);

    // Embedding defaults
    assert_eq!(config.embedding.provider, "tfidf");
    assert_eq!(config.embedding.dimensions, 384);
    assert_eq!(config.embedding.l1_cache_size, 10_000);

    // Retrieval defaults
    assert_eq!(config.retrieval.suggest_k, 8);
    assert_eq!(config.retrieval.refine_k, 10);
    assert_eq!(config.retrieval.refine_keep, 3);
    assert_eq!(config.retrieval.knowledge_k, 1);
    assert_eq!(config.retrieval.index_cache_ttl_secs, 3600);

    // Collaborator defaults
    assert_eq!(config.collaborators.tools, ToolAdapter::CorpusWithDemo);
    assert_eq!(config.collaborators.narrative, NarrativeAdapter::Demo);
    assert_eq!(config.collaborators.timeout_secs, 30);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[corpus]
primary_path = "/srv/corpus.json"
duplicate_policy = "reject"

[collaborators]
tools = "demo"
narrative = "none"
"#;
    let config = WayfarerConfig::from_toml(toml).unwrap();
    assert_eq!(config.corpus.primary_path, "/srv/corpus.json");
    assert_eq!(config.corpus.duplicate_policy, DuplicatePolicy::Reject);
    // Non-overridden fields keep defaults
    assert_eq!(config.corpus.fallback_path, "data/destinations.json");
    assert_eq!(config.collaborators.tools, ToolAdapter::Demo);
    assert_eq!(config.collaborators.narrative, NarrativeAdapter::None);
    assert_eq!(config.collaborators.timeout_secs, 30);
}

#[test]
fn config_rejects_unknown_adapter() {
    let result = WayfarerConfig::from_toml("[collaborators]\ntools = \"carrier-pigeon\"\n");
    assert!(result.is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = WayfarerConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = WayfarerConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.corpus.primary_path, config.corpus.primary_path);
    assert_eq!(
        roundtripped.embedding.dimensions,
        config.embedding.dimensions
    );
    assert_eq!(roundtripped.collaborators.tools, config.collaborators.tools);
}

#[test]
fn config_from_missing_file_is_config_error() {
    let err = WayfarerConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, wayfarer_core::WayfarerError::ConfigError(_)));
}
