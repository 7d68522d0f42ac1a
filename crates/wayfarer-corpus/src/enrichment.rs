//! Text enrichment: fold structured place lists into the embedded text.
//!
//! Suggestion text: `{description} Popular attractions: a, b, c. Notable dining: r1, r2. Accommodation options: h1, h2.`
//! Knowledge text:  `{name}: {description} Top attractions: ... Popular restaurants: ... Accommodation options: ...`
//!
//! A clause is only appended when its list is non-empty.

use wayfarer_core::constants::{
    ENRICHED_ACCOMMODATIONS, ENRICHED_ATTRACTIONS, ENRICHED_RESTAURANTS, KNOWLEDGE_ACCOMMODATIONS,
    KNOWLEDGE_ATTRACTIONS, KNOWLEDGE_RESTAURANTS,
};
use wayfarer_core::models::PlaceEntry;

fn append_clause(text: &mut String, label: &str, places: &[PlaceEntry], limit: usize) {
    if places.is_empty() {
        return;
    }
    let names: Vec<&str> = places.iter().take(limit).map(|p| p.name.as_str()).collect();
    text.push_str(&format!(" {label}: {}.", names.join(", ")));
}

/// Text embedded by the suggestion index.
pub fn enrich_for_suggestion(
    description: &str,
    attractions: &[PlaceEntry],
    restaurants: &[PlaceEntry],
    accommodations: &[PlaceEntry],
) -> String {
    let mut text = description.to_string();
    append_clause(&mut text, "Popular attractions", attractions, ENRICHED_ATTRACTIONS);
    append_clause(&mut text, "Notable dining", restaurants, ENRICHED_RESTAURANTS);
    append_clause(
        &mut text,
        "Accommodation options",
        accommodations,
        ENRICHED_ACCOMMODATIONS,
    );
    text
}

/// Text embedded by the knowledge base. Leads with the name so that a bare
/// city-name query lands on its own record.
pub fn enrich_for_knowledge(
    name: &str,
    description: &str,
    attractions: &[PlaceEntry],
    restaurants: &[PlaceEntry],
    accommodations: &[PlaceEntry],
) -> String {
    let mut text = format!("{name}: {description}");
    append_clause(&mut text, "Top attractions", attractions, KNOWLEDGE_ATTRACTIONS);
    append_clause(&mut text, "Popular restaurants", restaurants, KNOWLEDGE_RESTAURANTS);
    append_clause(
        &mut text,
        "Accommodation options",
        accommodations,
        KNOWLEDGE_ACCOMMODATIONS,
    );
    text
}
