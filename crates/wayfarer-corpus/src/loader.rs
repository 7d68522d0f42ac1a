//! CorpusLoader: the single loading contract for every entry point.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};
use wayfarer_core::config::{CorpusConfig, DuplicatePolicy};
use wayfarer_core::errors::{DataSourceError, WayfarerResult};
use wayfarer_core::models::{BudgetNotes, DestinationRecord, PlaceCategory};

use crate::enrichment::{enrich_for_knowledge, enrich_for_suggestion};
use crate::shape::{self, convert_places, CorpusShape, RawDestination};

/// A loaded, normalized corpus. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    records: Vec<DestinationRecord>,
    shape: CorpusShape,
    fingerprint: String,
}

impl Corpus {
    pub fn records(&self) -> &[DestinationRecord] {
        &self.records
    }

    pub fn shape(&self) -> CorpusShape {
        self.shape
    }

    /// blake3 hash over the ordered enriched texts.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record identifiers, in corpus order.
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    /// Suggestion texts, parallel to `names()`.
    pub fn enriched_texts(&self) -> Vec<String> {
        self.records.iter().map(|r| r.enriched_text.clone()).collect()
    }

    /// Knowledge texts, parallel to `names()`.
    pub fn knowledge_texts(&self) -> Vec<String> {
        self.records.iter().map(|r| r.knowledge_text.clone()).collect()
    }

    /// Exact lookup by identifier.
    pub fn get(&self, name: &str) -> Option<&DestinationRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Case-insensitive lookup by identifier.
    pub fn find_ignore_case(&self, name: &str) -> Option<&DestinationRecord> {
        let wanted = name.trim().to_lowercase();
        self.records.iter().find(|r| r.name.to_lowercase() == wanted)
    }
}

/// Normalizes destination sources into a `Corpus`. Performs no network I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusLoader {
    duplicates: DuplicatePolicy,
}

impl CorpusLoader {
    pub fn new(duplicates: DuplicatePolicy) -> Self {
        Self { duplicates }
    }

    /// Load using the configured primary path, falling back to the
    /// fallback path when the primary file does not exist.
    pub fn load_configured(config: &CorpusConfig) -> WayfarerResult<Corpus> {
        let loader = Self::new(config.duplicate_policy);
        let primary = Path::new(&config.primary_path);
        if primary.exists() {
            return loader.load_path(primary);
        }
        warn!(
            primary = %config.primary_path,
            fallback = %config.fallback_path,
            "primary corpus not found, using fallback"
        );
        loader.load_path(&config.fallback_path)
    }

    /// Load a corpus file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> WayfarerResult<Corpus> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataSourceError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path).map_err(|e| DataSourceError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let corpus = self.load_str(&content)?;
        info!(
            path = %path.display(),
            destinations = corpus.len(),
            shape = ?corpus.shape(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Load a corpus from its JSON text.
    pub fn load_str(&self, json: &str) -> WayfarerResult<Corpus> {
        let raw: Vec<RawDestination> =
            serde_json::from_str(json).map_err(|e| DataSourceError::Malformed {
                reason: e.to_string(),
            })?;
        let shape = shape::detect(&raw)?;

        let mut seen = HashSet::with_capacity(raw.len());
        let mut records = Vec::with_capacity(raw.len());
        for (position, dest) in raw.into_iter().enumerate() {
            let record = normalize(dest, shape, position)?;
            if !seen.insert(record.name.clone()) {
                match self.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(DataSourceError::DuplicateName { name: record.name }.into());
                    }
                    DuplicatePolicy::KeepFirst => {
                        warn!(name = %record.name, position, "duplicate destination dropped");
                        continue;
                    }
                }
            }
            records.push(record);
        }

        let fingerprint = fingerprint(&records);
        debug!(records = records.len(), %fingerprint, "corpus normalized");
        Ok(Corpus {
            records,
            shape,
            fingerprint,
        })
    }
}

fn normalize(
    dest: RawDestination,
    shape: CorpusShape,
    position: usize,
) -> WayfarerResult<DestinationRecord> {
    let name = dest.name.unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return Err(DataSourceError::EmptyName { position }.into());
    }
    let description = dest.description.unwrap_or_default();
    let country = dest
        .country
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| shape::country_from_name(&name));

    match shape {
        CorpusShape::Dynamic => {
            let attractions = convert_places(dest.attractions, PlaceCategory::Attraction);
            let restaurants = convert_places(dest.restaurants, PlaceCategory::Restaurant);
            let accommodations = convert_places(dest.accommodations, PlaceCategory::Accommodation);
            let enriched_text =
                enrich_for_suggestion(&description, &attractions, &restaurants, &accommodations);
            let knowledge_text = enrich_for_knowledge(
                &name,
                &description,
                &attractions,
                &restaurants,
                &accommodations,
            );
            Ok(DestinationRecord {
                name,
                country,
                country_code: dest.country_code,
                description,
                enriched_text,
                knowledge_text,
                attractions,
                restaurants,
                accommodations,
                budget_notes: dest.average_budget_tiers.map(Into::into).unwrap_or_default(),
                travel_tips: dest.travel_tips.unwrap_or_default(),
            })
        }
        CorpusShape::Fallback => Ok(DestinationRecord {
            knowledge_text: format!("{name}: {description}"),
            enriched_text: description.clone(),
            name,
            country,
            country_code: dest.country_code,
            description,
            attractions: Vec::new(),
            restaurants: Vec::new(),
            accommodations: Vec::new(),
            budget_notes: BudgetNotes::default(),
            travel_tips: dest.travel_tips.unwrap_or_default(),
        }),
    }
}

fn fingerprint(records: &[DestinationRecord]) -> String {
    let mut hasher = blake3::Hasher::new();
    for record in records {
        hasher.update(record.name.as_bytes());
        hasher.update(&[0]);
        hasher.update(record.enriched_text.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_an_array_is_malformed() {
        let err = CorpusLoader::default().load_str(r#"{"name":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn empty_array_is_an_empty_fallback_corpus() {
        let corpus = CorpusLoader::default().load_str("[]").unwrap();
        assert!(corpus.is_empty());
        assert_eq!(corpus.shape(), CorpusShape::Fallback);
    }

    #[test]
    fn dynamic_record_with_empty_name_is_rejected() {
        let err = CorpusLoader::default()
            .load_str(r#"[{"description":"x","attractions":[]}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            wayfarer_core::WayfarerError::DataSource(DataSourceError::EmptyName { position: 0 })
        ));
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let a = CorpusLoader::default()
            .load_str(r#"[{"name":"A","description":"one"}]"#)
            .unwrap();
        let b = CorpusLoader::default()
            .load_str(r#"[{"name":"A","description":"two"}]"#)
            .unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
