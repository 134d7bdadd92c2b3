//! Shared domain types for the revdex review search pipeline.
//!
//! The corpus is a flat list of review texts keyed by a dense zero-based
//! integer. Every derived store (polarity scores, embedding vectors) is
//! indexed by the same key space, so a record's key identifies the same
//! logical review everywhere.

pub mod config;
pub mod types;

pub use config::ProviderConfig;
pub use types::{AnnotatedRecord, Classification, Record, SearchResult, SentimentLabel};
