//! # wayfarer-embeddings
//!
//! Text encoders for destination search.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine
//! ├── DegradationChain (provider fallback)
//! │   ├── OllamaProvider (local server, optional)
//! │   └── TfIdfFallback (always available)
//! └── L1MemoryCache (moka, blake3 content hash keys)
//! ```

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod providers;

pub use cache::L1MemoryCache;
pub use degradation::DegradationChain;
pub use engine::EmbeddingEngine;
pub use providers::{OllamaProvider, TfIdfFallback};
