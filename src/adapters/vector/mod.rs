//! Vector index adapters. Implement VectorIndexPort.

pub mod pinecone;

pub use pinecone::PineconeAdapter;
