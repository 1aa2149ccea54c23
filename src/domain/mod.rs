//! Core domain layer. No external I/O dependencies.
//!
//! Entities and heuristics live here. Dependencies flow inward.

pub mod classify;
pub mod entities;
pub mod errors;
pub mod fallback;
pub mod scripture;

pub use entities::{
    AgeGroup, ContextChunk, ContextSource, Devotional, DevotionalBody, DevotionalRequest,
    RetrievedContext,
};
pub use errors::DomainError;
