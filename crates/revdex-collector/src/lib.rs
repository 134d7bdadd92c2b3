//! Review corpus collector.
//!
//! Fetches customer reviews from a site's paginated `reviews.json` endpoint,
//! deduplicates them by exact text equality, and writes the result to a flat
//! single-column CSV (`review_text`) for the search engine to ingest.

pub mod client;
pub mod error;
pub mod types;
pub mod writer;

mod dedup;
mod rate_limit;

pub use client::ReviewsClient;
pub use error::CollectError;
pub use types::{ReviewItem, ReviewsPage};
pub use writer::write_corpus;
