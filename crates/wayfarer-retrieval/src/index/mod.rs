pub mod flat_l2;
pub mod index_cache;

pub use flat_l2::{EmbeddingIndex, Neighbor};
pub use index_cache::IndexCache;
