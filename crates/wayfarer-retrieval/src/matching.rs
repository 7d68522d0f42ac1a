//! Resolving a typed destination choice against a candidate list.

use wayfarer_core::errors::{ValidationError, WayfarerError, WayfarerResult};

/// Case-insensitive match: an exact match anywhere in `candidates` wins,
/// otherwise the first candidate containing the input.
pub fn resolve_choice(input: &str, candidates: &[String]) -> WayfarerResult<String> {
    let wanted = input.trim().to_lowercase();
    if wanted.is_empty() {
        return Err(ValidationError::EmptyChoice.into());
    }
    let lowered: Vec<String> = candidates.iter().map(|c| c.to_lowercase()).collect();

    lowered
        .iter()
        .position(|c| *c == wanted)
        .or_else(|| lowered.iter().position(|c| c.contains(&wanted)))
        .map(|i| candidates[i].clone())
        .ok_or_else(|| WayfarerError::NoMatch {
            input: input.trim().to_string(),
            candidates: candidates.to_vec(),
        })
}
