//! Refined shortlist after a provisional pick.
//!
//! Re-queries with a wider window, drops the provisional pick by exact
//! identifier, keeps the first few survivors in rank order and puts the
//! pick back at the end.

use std::collections::HashSet;

use tracing::debug;
use wayfarer_core::config::RetrievalConfig;
use wayfarer_core::errors::WayfarerResult;

use crate::catalog::DestinationCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefinementSelector {
    k: usize,
    keep: usize,
}

impl RefinementSelector {
    pub fn new(k: usize, keep: usize) -> Self {
        Self { k, keep }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(config.refine_k, config.refine_keep)
    }

    pub fn refine(
        &self,
        catalog: &DestinationCatalog,
        query: &str,
        first_choice: &str,
    ) -> WayfarerResult<Vec<String>> {
        let ranked = catalog.ranked_names(query, self.k)?;
        let shortlist = self.shortlist(&ranked, first_choice);
        debug!(first_choice, ?shortlist, "refined shortlist");
        Ok(shortlist)
    }

    /// Pure selection step over an already ranked list.
    pub fn shortlist(&self, ranked: &[String], first_choice: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out: Vec<String> = ranked
            .iter()
            .filter(|name| name.as_str() != first_choice)
            .filter(|name| seen.insert(name.as_str()))
            .take(self.keep)
            .cloned()
            .collect();
        out.push(first_choice.to_string());
        out
    }
}

impl Default for RefinementSelector {
    fn default() -> Self {
        Self::from_config(&RetrievalConfig::default())
    }
}
