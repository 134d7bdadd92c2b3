//! Filtered cosine-similarity search over the aligned corpus.

use revdex_core::{AnnotatedRecord, SearchResult};

use crate::error::EngineError;
use crate::index::EmbeddingIndex;

/// Cosine of the angle between two vectors: `dot(a,b) / (‖a‖·‖b‖)`.
///
/// Range `[-1, 1]`. Returns `0.0` if either vector has zero norm, so a
/// degenerate vector never divides by zero and never wins a search.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Resolves queries against a sentiment-selected subset of the corpus.
///
/// Borrows the annotated records and the embedding index read-only; one
/// engine can serve any number of queries against the same built index.
pub struct FilteredSearchEngine<'a> {
    records: &'a [AnnotatedRecord],
    index: &'a EmbeddingIndex,
}

impl<'a> FilteredSearchEngine<'a> {
    /// Pair annotated records with their embedding index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Misalignment`] if the record list and the
    /// index disagree on length or a record's key does not match its
    /// position. Either condition means a filter was applied to one side
    /// only and results would be silently wrong.
    pub fn new(
        records: &'a [AnnotatedRecord],
        index: &'a EmbeddingIndex,
    ) -> Result<Self, EngineError> {
        if records.len() != index.len() || records.iter().enumerate().any(|(i, r)| r.key != i) {
            return Err(EngineError::Misalignment {
                records: records.len(),
                vectors: index.len(),
            });
        }
        Ok(Self { records, index })
    }

    /// Keys of records satisfying `predicate`, in original key order.
    pub fn selected_keys<P>(&self, predicate: P) -> Vec<usize>
    where
        P: Fn(&AnnotatedRecord) -> bool,
    {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .map(|r| r.key)
            .collect()
    }

    /// Find the subset record most similar to the query embedding.
    ///
    /// Filters first, ranks second: similarity is only computed for keys
    /// the predicate selects. An empty selection returns `None` — a
    /// legitimate outcome (e.g. no negative reviews exist), not an error.
    /// Ties resolve to the lowest original key via strict-greater
    /// comparison, so results are deterministic. The returned key always
    /// indexes the original corpus, never the filtered subset.
    pub fn search<P>(&self, predicate: P, query_embedding: &[f32]) -> Option<SearchResult>
    where
        P: Fn(&AnnotatedRecord) -> bool,
    {
        let selected = self.selected_keys(predicate);
        if selected.is_empty() {
            tracing::debug!("predicate selected no records");
            return None;
        }

        let mut best: Option<(usize, f32)> = None;
        for &key in &selected {
            let Some(vector) = self.index.vector_of(key) else {
                // unreachable: new() rejected any record/index misalignment
                continue;
            };
            let score = cosine_similarity(query_embedding, vector);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((key, score));
            }
        }

        let (key, score) = best?;
        tracing::debug!(key, score, candidates = selected.len(), "best match found");
        Some(SearchResult {
            key,
            score,
            text: self.records[key].text.clone(),
        })
    }
}
