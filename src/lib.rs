//! devo-gen: age-targeted devotional generation with Hexagonal Architecture.
//!
//! Retrieval over a devotional corpus plus one hosted-model completion call,
//! rendered into the five-section AOG Family Devotions format behind a small
//! JSON API.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
