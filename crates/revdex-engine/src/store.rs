//! Canonical record store for the review corpus.

use std::path::Path;

use revdex_core::Record;

use crate::error::EngineError;

/// Owns the canonical review list, keyed by a dense zero-based index.
///
/// Rows with blank text are dropped at load and the remaining records are
/// renumbered, so keys always form the contiguous range `[0, N)`. Every
/// downstream store (polarities, embedding rows) is indexed by these keys.
/// There is no mutation API after load.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Loads the corpus from a single-column `review_text` CSV.
    ///
    /// The first column of each row is taken as the review text; rows whose
    /// text is empty after trimming are dropped and keys are renumbered.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Ingest`] if the file is absent, unreadable,
    /// or not valid CSV.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let path_display = path.as_ref().display().to_string();

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())
            .map_err(|source| EngineError::Ingest {
                path: path_display.clone(),
                source,
            })?;

        let mut texts = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|source| EngineError::Ingest {
                path: path_display.clone(),
                source,
            })?;
            texts.push(row.get(0).unwrap_or("").to_owned());
        }

        let store = Self::from_texts(texts);
        tracing::info!(path = %path_display, records = store.len(), "corpus loaded");
        Ok(store)
    }

    /// Builds a store from raw texts, dropping blank entries and assigning
    /// dense keys in input order.
    #[must_use]
    pub fn from_texts<I>(texts: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut records = Vec::new();
        for text in texts {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            records.push(Record {
                key: records.len(),
                text: text.to_owned(),
            });
        }
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Text of the record at `key`, or `None` if `key >= len()`.
    #[must_use]
    pub fn text_of(&self, key: usize) -> Option<&str> {
        self.records.get(key).map(|r| r.text.as_str())
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// All texts in key order, borrowed for batch provider calls.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.text.as_str()).collect()
    }
}
