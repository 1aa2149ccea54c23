//! Infrastructure adapters. Implement outbound ports plus the HTTP edge.
//!
//! Completion/embedding providers, vector index, web handlers. Map
//! infrastructure errors to DomainError.

pub mod ai;
pub mod http;
pub mod vector;
