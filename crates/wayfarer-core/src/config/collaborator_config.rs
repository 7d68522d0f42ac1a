use serde::{Deserialize, Serialize};

use super::defaults;

/// Which travel-tool adapter answers weather/POI/transport lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolAdapter {
    /// Answers from the loaded corpus only.
    Corpus,
    /// Fixed demo text.
    Demo,
    /// Corpus first, demo text when the corpus has nothing.
    #[default]
    CorpusWithDemo,
    /// Every lookup is unavailable.
    None,
}

/// Which narrative adapter writes itineraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeAdapter {
    /// Deterministic day-by-day template.
    #[default]
    Demo,
    /// No generator configured; the itinerary stage fails.
    None,
}

/// External collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollaboratorConfig {
    pub tools: ToolAdapter,
    pub narrative: NarrativeAdapter,
    /// Request timeout for collaborators that do network I/O (seconds).
    pub timeout_secs: u64,
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            tools: ToolAdapter::default(),
            narrative: NarrativeAdapter::default(),
            timeout_secs: defaults::DEFAULT_COLLABORATOR_TIMEOUT_SECS,
        }
    }
}
