//! AI adapter module. Completion and embedding providers.
//!
//! OpenAI-compatible adapters plus a mock completion adapter for running
//! without credentials.

pub mod embedding_adapter;
pub mod mock_adapter;
pub mod openai_adapter;

pub use embedding_adapter::OpenAiEmbeddingAdapter;
pub use mock_adapter::MockCompletionAdapter;
pub use openai_adapter::OpenAiCompletionAdapter;
