use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read corpus {path}: {source}")]
    Ingest {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("classifier error: {0}")]
    Classification(String),

    #[error("embedder error: {0}")]
    Embedding(String),

    #[error("embedding dimension mismatch at key {key}: expected {expected}, got {got}")]
    DimensionMismatch {
        key: usize,
        expected: usize,
        got: usize,
    },

    #[error("annotation/index misalignment: {records} records vs {vectors} vectors")]
    Misalignment { records: usize, vectors: usize },
}
