//! Exact k-nearest-neighbour index using squared Euclidean distance.
//!
//! Vectors are stored parallel to record identifiers; position `i` in one is
//! position `i` in the other. Read-only after construction.
//!
//! An index built through an encoder remembers which provider produced its
//! vectors and refuses queries encoded by any other.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wayfarer_core::errors::{EmbeddingError, WayfarerResult};
use wayfarer_core::traits::IEmbeddingProvider;

/// One query hit: corpus position and squared distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingIndex {
    names: Vec<String>,
    vectors: Vec<Vec<f32>>,
    dimensions: usize,
    /// `None` for indexes assembled from raw vectors.
    encoded_by: Option<String>,
}

impl EmbeddingIndex {
    /// Encode `texts` with `encoder` and index them under `names`.
    pub fn build(
        encoder: &dyn IEmbeddingProvider,
        names: Vec<String>,
        texts: &[String],
    ) -> WayfarerResult<Self> {
        if names.len() != texts.len() {
            return Err(EmbeddingError::LengthMismatch {
                names: names.len(),
                vectors: texts.len(),
            }
            .into());
        }
        let (vectors, served_by) = if texts.is_empty() {
            (Vec::new(), encoder.name().to_string())
        } else {
            encoder.embed_batch_attributed(texts)?
        };
        let mut index = Self::from_vectors(names, vectors, encoder.dimensions())?;
        debug!(
            encoder = %served_by,
            entries = index.len(),
            dims = index.dimensions,
            "index built"
        );
        index.encoded_by = Some(served_by);
        Ok(index)
    }

    /// Assemble an index from precomputed vectors.
    pub fn from_vectors(
        names: Vec<String>,
        vectors: Vec<Vec<f32>>,
        dimensions: usize,
    ) -> WayfarerResult<Self> {
        if names.len() != vectors.len() {
            return Err(EmbeddingError::LengthMismatch {
                names: names.len(),
                vectors: vectors.len(),
            }
            .into());
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimensions) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dimensions,
                actual: bad.len(),
            }
            .into());
        }
        Ok(Self {
            names,
            vectors,
            dimensions,
            encoded_by: None,
        })
    }

    /// The `k` nearest entries to `text`, closest first.
    pub fn query(
        &self,
        encoder: &dyn IEmbeddingProvider,
        text: &str,
        k: usize,
    ) -> WayfarerResult<Vec<Neighbor>> {
        if self.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        let (vector, served_by) = encoder.embed_attributed(text)?;
        if let Some(built_by) = &self.encoded_by {
            if *built_by != served_by {
                return Err(EmbeddingError::ProviderMismatch {
                    index: built_by.clone(),
                    query: served_by,
                }
                .into());
            }
        }
        self.query_vector(&vector, k)
    }

    /// Ties keep corpus order; `k` is clamped to the index size.
    pub fn query_vector(&self, vector: &[f32], k: usize) -> WayfarerResult<Vec<Neighbor>> {
        if self.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        if vector.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }

        let mut hits: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, v)| Neighbor {
                index,
                distance: squared_l2(vector, v),
            })
            .collect();
        hits.sort_by(|a, b| match a.distance.total_cmp(&b.distance) {
            Ordering::Equal => a.index.cmp(&b.index),
            other => other,
        });
        hits.truncate(k.min(self.len()));
        Ok(hits)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Provider whose vector space this index lives in.
    pub fn encoded_by(&self) -> Option<&str> {
        self.encoded_by.as_deref()
    }
}

pub fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
