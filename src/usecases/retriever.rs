//! Content retrieval with graceful degradation.
//!
//! Embeds the query, runs a nearest-neighbor search, and joins the ranked
//! text chunks. Absent backend, empty results, and provider errors all
//! degrade to the canonical fallback paragraph — retrieval never raises.

use crate::domain::fallback::FALLBACK_CONTEXT;
use crate::domain::{ContextSource, DomainError, RetrievedContext};
use crate::ports::{EmbeddingPort, VectorIndexPort};
use crate::shared::config::DEFAULT_TOP_K;
use std::sync::Arc;
use tracing::{info, warn};

/// The pair of provider handles needed for index-backed retrieval.
/// Established once at process start; absence is a documented state the
/// retriever degrades from, not an error.
pub struct RetrievalBackend {
    embeddings: Arc<dyn EmbeddingPort>,
    index: Arc<dyn VectorIndexPort>,
}

impl RetrievalBackend {
    pub fn new(embeddings: Arc<dyn EmbeddingPort>, index: Arc<dyn VectorIndexPort>) -> Self {
        Self { embeddings, index }
    }
}

pub struct ContentRetriever {
    backend: Option<RetrievalBackend>,
    top_k: usize,
}

impl ContentRetriever {
    pub fn new(backend: Option<RetrievalBackend>, top_k: usize) -> Self {
        Self { backend, top_k }
    }

    /// Retriever with no index backend; always serves the fallback text.
    pub fn fallback_only() -> Self {
        Self::new(None, DEFAULT_TOP_K)
    }

    /// Fetch background text for the query. Always returns non-empty text;
    /// the degradation reason is logged, never surfaced.
    pub async fn retrieve(&self, query: &str) -> RetrievedContext {
        let Some(backend) = &self.backend else {
            info!("vector index not configured, using fallback content");
            return Self::fallback_context();
        };

        match Self::try_retrieve(backend, query, self.top_k).await {
            Ok(Some(text)) => {
                info!(context_len = text.len(), "retrieved context from index");
                RetrievedContext {
                    text,
                    source: ContextSource::Index,
                }
            }
            Ok(None) => {
                info!("index returned no text-bearing matches, using fallback content");
                Self::fallback_context()
            }
            Err(e) => {
                warn!(error = %e, "retrieval failed, using fallback content");
                Self::fallback_context()
            }
        }
    }

    /// The fallible path: embed, query, join. `Ok(None)` means the index
    /// answered but nothing carried text metadata.
    async fn try_retrieve(
        backend: &RetrievalBackend,
        query: &str,
        top_k: usize,
    ) -> Result<Option<String>, DomainError> {
        let vector = backend.embeddings.embed(query).await?;
        let chunks = backend.index.query(&vector, top_k).await?;

        if chunks.is_empty() {
            return Ok(None);
        }

        // Ranking order is the index's; joined with blank-line separators.
        let text = chunks
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        Ok(Some(text))
    }

    fn fallback_context() -> RetrievedContext {
        RetrievedContext {
            text: FALLBACK_CONTEXT.to_string(),
            source: ContextSource::Fallback,
        }
    }
}
