//! Wiring & DI. Entry point: bootstrap adapters, inject into the service,
//! serve the HTTP API. No business logic here.

use devo_gen::adapters::ai::{
    MockCompletionAdapter, OpenAiCompletionAdapter, OpenAiEmbeddingAdapter,
};
use devo_gen::adapters::http::build_router;
use devo_gen::adapters::vector::PineconeAdapter;
use devo_gen::ports::{CompletionPort, EmbeddingPort, VectorIndexPort};
use devo_gen::shared::config::AppConfig;
use devo_gen::usecases::{ContentRetriever, DevotionalService, RetrievalBackend};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_default();
    let timeout = cfg.request_timeout();

    // --- Completion service (required stage; mock when no key is set) ---
    let completion: Arc<dyn CompletionPort> = if cfg.is_ai_configured() {
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "completion service configured with OpenAI adapter"
        );
        Arc::new(OpenAiCompletionAdapter::new(
            cfg.ai_api_url_or_default(),
            cfg.ai_api_key().unwrap_or_default(),
            cfg.ai_model_or_default(),
            timeout,
        ))
    } else {
        warn!("DEVO_AI_API_KEY not set, using mock completion adapter");
        Arc::new(MockCompletionAdapter::new())
    };

    // --- Retrieval backend (optional; fallback content when absent) ---
    let retriever = if cfg.is_index_configured() {
        info!(
            model = %cfg.embedding_model_or_default(),
            top_k = cfg.top_k_or_default(),
            "vector index configured, retrieval enabled"
        );
        let embeddings: Arc<dyn EmbeddingPort> = Arc::new(OpenAiEmbeddingAdapter::new(
            cfg.embedding_api_url_or_default(),
            cfg.ai_api_key().unwrap_or_default(),
            cfg.embedding_model_or_default(),
            timeout,
        ));
        let index: Arc<dyn VectorIndexPort> = Arc::new(PineconeAdapter::new(
            cfg.pinecone_index_host().unwrap_or_default(),
            cfg.pinecone_api_key().unwrap_or_default(),
            timeout,
        ));
        ContentRetriever::new(
            Some(RetrievalBackend::new(embeddings, index)),
            cfg.top_k_or_default(),
        )
    } else {
        info!("vector index not configured, retriever will serve fallback content");
        ContentRetriever::fallback_only()
    };

    // --- Service & router ---
    let service = Arc::new(DevotionalService::new(completion, retriever));
    let app = build_router(service);

    let addr = cfg.bind_addr_or_default();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "devotional service listening");

    axum::serve(listener, app).await?;

    Ok(())
}
