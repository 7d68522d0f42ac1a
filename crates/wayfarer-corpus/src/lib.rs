//! # wayfarer-corpus
//!
//! Loads a destination corpus from JSON and normalizes it into
//! `DestinationRecord`s. Two source shapes are accepted:
//!
//! ```text
//! dynamic   [{ name, country, description, attractions[], restaurants[], accommodations[], ... }]
//! fallback  [{ name, description }]
//! ```
//!
//! Every entry point goes through `CorpusLoader`; record order is preserved.

pub mod enrichment;
pub mod loader;
pub mod shape;

pub use loader::{Corpus, CorpusLoader};
pub use shape::CorpusShape;
