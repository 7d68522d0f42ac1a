//! Travel-tool adapters.
//!
//! - `corpus`: answers from the loaded records
//! - `demo`: fixed `[Demo]` text
//! - `corpus_with_demo`: corpus first, demo when the corpus has nothing
//! - `none`: every lookup is not configured

pub mod corpus_tools;
pub mod demo_tools;
pub mod fallback;
pub mod no_tools;

pub use corpus_tools::CorpusTools;
pub use demo_tools::DemoTools;
pub use fallback::FallbackTools;
pub use no_tools::NoTools;

use std::sync::Arc;

use tracing::info;
use wayfarer_core::config::{CollaboratorConfig, ToolAdapter};
use wayfarer_core::traits::ITravelTools;
use wayfarer_corpus::Corpus;

pub fn create_tools(config: &CollaboratorConfig, corpus: Arc<Corpus>) -> Arc<dyn ITravelTools> {
    let tools: Arc<dyn ITravelTools> = match config.tools {
        ToolAdapter::Corpus => Arc::new(CorpusTools::new(corpus)),
        ToolAdapter::Demo => Arc::new(DemoTools),
        ToolAdapter::CorpusWithDemo => Arc::new(FallbackTools::new(
            Box::new(CorpusTools::new(corpus)),
            Box::new(DemoTools),
        )),
        ToolAdapter::None => Arc::new(NoTools),
    };
    info!(adapter = tools.name(), "travel tools ready");
    tools
}
