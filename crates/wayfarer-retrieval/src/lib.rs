//! # wayfarer-retrieval
//!
//! Similarity search over the destination corpus.
//!
//! ```text
//! DestinationCatalog ── EmbeddingIndex (enriched texts) ── BudgetPartitioner
//!                   └── RefinementSelector
//! KnowledgeBase ─────── EmbeddingIndex (knowledge texts)
//! IndexCache: memoised builds, keyed by content hash
//! ```

pub mod catalog;
pub mod index;
pub mod knowledge;
pub mod matching;
pub mod partition;
pub mod refinement;

pub use catalog::DestinationCatalog;
pub use index::{EmbeddingIndex, IndexCache, Neighbor};
pub use knowledge::KnowledgeBase;
pub use matching::resolve_choice;
pub use partition::BudgetPartitioner;
pub use refinement::RefinementSelector;
