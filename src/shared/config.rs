//! Application configuration. Provider credentials, endpoints, bind address.

use serde::Deserialize;

/// Default candidate count for vector index queries.
pub const DEFAULT_TOP_K: usize = 3;

/// Default bound on each outbound provider call, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Listen address for the HTTP server. Read from DEVO_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Completion Service Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Completion API key (e.g., OpenAI). Read from DEVO_AI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Completion API URL. Defaults to OpenAI. Read from DEVO_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Completion model name. Defaults to "gpt-4o-mini". Read from DEVO_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Embedding Service Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Embedding API URL. Defaults to OpenAI. Read from DEVO_EMBEDDING_API_URL.
    #[serde(default)]
    pub embedding_api_url: Option<String>,

    /// Embedding model name. Read from DEVO_EMBEDDING_MODEL.
    #[serde(default)]
    pub embedding_model: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Vector Index (Pinecone) Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Pinecone API key. Read from DEVO_PINECONE_API_KEY.
    #[serde(default)]
    pub pinecone_api_key: Option<String>,

    /// Pinecone index host URL. Read from DEVO_PINECONE_INDEX_HOST.
    #[serde(default)]
    pub pinecone_index_host: Option<String>,

    /// Nearest-neighbor candidate count. Read from DEVO_TOP_K.
    #[serde(default)]
    pub top_k: Option<usize>,

    /// Outbound call timeout in seconds. Read from DEVO_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("DEVO"));
        if let Ok(path) = std::env::var("DEVO_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the HTTP listen address. Defaults to 0.0.0.0:8000.
    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| "0.0.0.0:8000".to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Completion Service Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the completion API key if configured. Reads from config or
    /// DEVO_AI_API_KEY env.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("DEVO_AI_API_KEY").ok())
    }

    /// Returns the completion API URL. Defaults to the OpenAI chat
    /// completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string())
    }

    /// Returns the completion model name. Defaults to "gpt-4o-mini".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| "gpt-4o-mini".to_string())
    }

    /// Returns true if the completion service is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Embedding Service Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the embedding API URL. Defaults to the OpenAI embeddings endpoint.
    pub fn embedding_api_url_or_default(&self) -> String {
        self.embedding_api_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1/embeddings".to_string())
    }

    /// Returns the embedding model name. Defaults to "text-embedding-3-large".
    pub fn embedding_model_or_default(&self) -> String {
        self.embedding_model
            .clone()
            .unwrap_or_else(|| "text-embedding-3-large".to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Vector Index Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the Pinecone API key from config or DEVO_PINECONE_API_KEY env.
    pub fn pinecone_api_key(&self) -> Option<String> {
        self.pinecone_api_key
            .clone()
            .or_else(|| std::env::var("DEVO_PINECONE_API_KEY").ok())
    }

    /// Returns the Pinecone index host from config or DEVO_PINECONE_INDEX_HOST env.
    pub fn pinecone_index_host(&self) -> Option<String> {
        self.pinecone_index_host
            .clone()
            .or_else(|| std::env::var("DEVO_PINECONE_INDEX_HOST").ok())
    }

    /// Returns true if the vector index is fully configured. When false the
    /// retriever runs in fallback-only mode.
    pub fn is_index_configured(&self) -> bool {
        self.pinecone_api_key().is_some() && self.pinecone_index_host().is_some()
    }

    /// Returns the nearest-neighbor candidate count. Defaults to 3.
    pub fn top_k_or_default(&self) -> usize {
        self.top_k.unwrap_or(DEFAULT_TOP_K)
    }

    /// Returns the outbound call timeout. Defaults to 30 seconds.
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
