//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Rejected input (missing/short prompt, unknown age group).
    /// Surfaced as 400; the pipeline is never invoked.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Embedding service failure. Recovered inside the retriever.
    #[error("embedding service error: {0}")]
    Embedding(String),

    /// Vector index failure. Recovered inside the retriever.
    #[error("vector index error: {0}")]
    VectorIndex(String),

    /// Completion service failure (network, auth, rate limit, timeout).
    /// The only pipeline stage with no safe substitute; propagates as 500.
    #[error("completion service error: {0}")]
    Completion(String),
}
