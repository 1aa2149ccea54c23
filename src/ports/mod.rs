//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into infrastructure. The HTTP
//! adapter is the sole inbound edge and invokes the service directly.

pub mod outbound;

pub use outbound::{CompletionPort, EmbeddingPort, VectorIndexPort};
