/// Wayfarer version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Attraction names folded into a record's enriched text.
pub const ENRICHED_ATTRACTIONS: usize = 3;
/// Restaurant names folded into a record's enriched text.
pub const ENRICHED_RESTAURANTS: usize = 2;
/// Accommodation names folded into a record's enriched text.
pub const ENRICHED_ACCOMMODATIONS: usize = 2;

/// Attractions surfaced by the knowledge follow-up.
pub const KNOWLEDGE_ATTRACTIONS: usize = 5;
/// Restaurants surfaced by the knowledge follow-up.
pub const KNOWLEDGE_RESTAURANTS: usize = 3;
/// Accommodations surfaced by the knowledge follow-up.
pub const KNOWLEDGE_ACCOMMODATIONS: usize = 3;

/// Items per budget tier in the canonical partition policy.
pub const BUDGET_SLICE_WIDTH: usize = 2;
/// Start of the `medium` slice in the ranked window.
pub const BUDGET_MEDIUM_START: usize = 2;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "WAYFARER_LOG";
