use serde::{Deserialize, Serialize};

use super::defaults;

/// How the loader treats two records with the same `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the load with `DataSourceError::DuplicateName`.
    Reject,
    /// Keep the first occurrence, drop later ones with a warning.
    #[default]
    KeepFirst,
}

/// Corpus source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Dynamic-shape corpus (records with attraction/restaurant/hotel lists).
    pub primary_path: String,
    /// Fallback-shape corpus used when the primary file is absent.
    pub fallback_path: String,
    /// Identifier collision handling.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            primary_path: defaults::DEFAULT_PRIMARY_CORPUS_PATH.to_string(),
            fallback_path: defaults::DEFAULT_FALLBACK_CORPUS_PATH.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}
