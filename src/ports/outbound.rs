//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. All three services are opaque HTTP providers;
//! handles are constructed once at startup and shared across requests.

use crate::domain::{ContextChunk, DomainError};

/// Chat-completion service. One prompt in, raw model text out.
#[async_trait::async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send the assembled prompt and return the raw completion text.
    ///
    /// # Errors
    /// Returns `DomainError::Completion` on any transport, auth, or
    /// timeout failure. Callers must not retry silently; this is the one
    /// pipeline stage with no safe substitute.
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, DomainError>;
}

/// Embedding service. Text to a fixed-dimension dense vector.
#[async_trait::async_trait]
pub trait EmbeddingPort: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;
}

/// Nearest-neighbor vector index. Query vector to ranked text chunks.
///
/// Implementations attach stored text metadata and exclude raw vectors;
/// candidates without text metadata are dropped from the result.
#[async_trait::async_trait]
pub trait VectorIndexPort: Send + Sync {
    async fn query(&self, vector: &[f32], top_k: usize)
        -> Result<Vec<ContextChunk>, DomainError>;
}
