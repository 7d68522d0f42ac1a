// Single source of truth for all default values.

// --- Corpus ---
pub const DEFAULT_PRIMARY_CORPUS_PATH: &str = "travel_data/traveldata.json";
pub const DEFAULT_FALLBACK_CORPUS_PATH: &str = "data/destinations.json";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "tfidf";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 64;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_OLLAMA_MODEL: &str = "all-minilm";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

// --- Retrieval ---
pub const DEFAULT_SUGGEST_K: usize = 8;
pub const DEFAULT_REFINE_K: usize = 10;
pub const DEFAULT_REFINE_KEEP: usize = 3;
pub const DEFAULT_KNOWLEDGE_K: usize = 1;
pub const DEFAULT_INDEX_CACHE_CAPACITY: u64 = 16;
pub const DEFAULT_INDEX_CACHE_TTL_SECS: u64 = 3600; // 1 hour

// --- Collaborators ---
pub const DEFAULT_COLLABORATOR_TIMEOUT_SECS: u64 = 30;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
