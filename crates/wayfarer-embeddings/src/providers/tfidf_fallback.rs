//! Hashed TF-IDF encoder.
//!
//! Terms are hashed (FNV-1a) into a fixed number of buckets and weighted by
//! term frequency times a length-based IDF proxy, then L2-normalized. Fully
//! local and deterministic, so it doubles as the reference encoder in tests.

use std::collections::BTreeMap;

use rayon::prelude::*;
use wayfarer_core::errors::WayfarerResult;
use wayfarer_core::traits::IEmbeddingProvider;

/// Words too common in travel descriptions to carry signal.
const STOPWORDS: [&str; 12] = [
    "and", "the", "with", "for", "its", "of", "in", "to", "is", "an", "on", "by",
];

pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Lowercase alphanumeric terms of two or more characters, minus stopwords.
    fn terms(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.chars().count() >= 2)
            .map(str::to_lowercase)
            .filter(|s| !STOPWORDS.contains(&s.as_str()))
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let terms = Self::terms(text);
        if terms.is_empty() {
            return vec;
        }

        // BTreeMap keeps accumulation order fixed, so float sums are reproducible.
        let mut counts: BTreeMap<&str, f32> = BTreeMap::new();
        for term in &terms {
            *counts.entry(term.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        for (term, count) in counts {
            let idf = 1.0 + (term.len() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += (count / total) * idf;
        }

        let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            vec.iter_mut().for_each(|v| *v /= norm);
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> WayfarerResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> WayfarerResult<Vec<Vec<f32>>> {
        Ok(texts.par_iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}
