//! Parsing of per-stage user input.

use std::collections::HashSet;

use wayfarer_core::errors::ValidationError;

/// A positive whole number of days, written as plain ASCII digits.
pub fn parse_duration(input: &str) -> Result<u32, ValidationError> {
    let digits = input.trim();
    let parsed = if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse::<u32>().ok()
    } else {
        None
    };
    match parsed {
        Some(days) if days > 0 => Ok(days),
        _ => Err(ValidationError::InvalidDuration {
            input: input.to_string(),
        }),
    }
}

/// Comma-separated tags: trimmed, lowercased, blanks dropped, first
/// occurrence of each kept.
pub fn parse_interests(input: &str) -> Result<Vec<String>, ValidationError> {
    let mut seen = HashSet::new();
    let interests: Vec<String> = input
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.clone()))
        .collect();
    if interests.is_empty() {
        return Err(ValidationError::EmptyInterests);
    }
    Ok(interests)
}
