mod embedding;
mod narrative;
mod travel_tools;

pub use embedding::IEmbeddingProvider;
pub use narrative::INarrativeGenerator;
pub use travel_tools::ITravelTools;
