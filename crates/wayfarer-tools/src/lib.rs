//! # wayfarer-tools
//!
//! Adapters behind `ITravelTools` and `INarrativeGenerator`, chosen by
//! `CollaboratorConfig`.

pub mod narrative;
pub mod tools;

pub use narrative::{create_narrator, DemoNarrator, UnconfiguredNarrator};
pub use tools::{create_tools, CorpusTools, DemoTools, FallbackTools, NoTools};
