//! Filtered semantic search over a sentiment-annotated review corpus.
//!
//! Loads the collected `review_text` CSV, scores every review for sentiment
//! polarity via a classifier provider, embeds every review via an embedding
//! provider, and answers free-text queries by cosine similarity restricted
//! to a sentiment-defined subset (e.g. only negative reviews).
//!
//! The load-bearing invariant throughout is alignment: record key `k`
//! identifies the same review in the record store, the polarity annotations,
//! and the embedding index. Filtering always happens on keys, and results
//! are always mapped back to the original key space.

pub mod annotator;
pub mod classifier;
pub mod embedder;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod report;
pub mod search;
pub mod store;

pub use annotator::{
    negative_filter, polarity_of, positive_filter, SentimentAnnotator, NEGATIVE_THRESHOLD,
};
pub use classifier::{Classifier, HttpClassifier};
pub use embedder::{Embedder, HttpEmbedder};
pub use error::EngineError;
pub use index::EmbeddingIndex;
pub use pipeline::run_review_search;
pub use report::format_search_result;
pub use search::{cosine_similarity, FilteredSearchEngine};
pub use store::RecordStore;
