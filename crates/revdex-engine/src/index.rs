//! Dense embedding matrix aligned with record keys.

use crate::embedder::Embedder;
use crate::error::EngineError;

/// Holds one embedding vector per record, row `k` for record key `k`.
///
/// The dimension is fixed by the first row; every later row must match it.
/// Built once, read-only afterwards. All vectors are held in memory, so the
/// working set is `N × D` floats.
#[derive(Debug, Clone)]
pub struct EmbeddingIndex {
    dim: usize,
    vectors: Vec<Vec<f32>>,
}

impl EmbeddingIndex {
    /// Embed `texts` in one batch call and build the index.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Embedding`] if the provider fails or returns a
    ///   different number of vectors than inputs.
    /// - [`EngineError::DimensionMismatch`] if any vector's dimension
    ///   differs from the first row's. Defensive: a well-behaved provider
    ///   never triggers this.
    pub async fn build<E: Embedder>(embedder: &E, texts: &[&str]) -> Result<Self, EngineError> {
        if texts.is_empty() {
            return Ok(Self {
                dim: 0,
                vectors: Vec::new(),
            });
        }

        let vectors = embedder.embed(texts).await?;
        if vectors.len() != texts.len() {
            return Err(EngineError::Embedding(format!(
                "embedder returned {} vectors for {} texts",
                vectors.len(),
                texts.len()
            )));
        }

        let index = Self::from_vectors(vectors)?;
        tracing::info!(rows = index.len(), dim = index.dim(), "embedding index built");
        Ok(index)
    }

    /// Build the index from pre-computed vectors, enforcing the fixed
    /// dimension invariant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DimensionMismatch`] naming the first
    /// offending row if the vectors are ragged.
    pub fn from_vectors(vectors: Vec<Vec<f32>>) -> Result<Self, EngineError> {
        let dim = vectors.first().map_or(0, Vec::len);
        for (key, vector) in vectors.iter().enumerate() {
            if vector.len() != dim {
                return Err(EngineError::DimensionMismatch {
                    key,
                    expected: dim,
                    got: vector.len(),
                });
            }
        }
        Ok(Self { dim, vectors })
    }

    /// Embed a query with the same provider instance used for the corpus,
    /// so query and corpus vectors share one space.
    ///
    /// The query text is passed to the provider unmodified; behavior for an
    /// empty string is provider-defined and is the caller's concern.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Embedding`] if the provider fails or returns
    ///   anything other than exactly one vector.
    /// - [`EngineError::DimensionMismatch`] if the query vector's dimension
    ///   differs from the index's (non-empty index only).
    pub async fn embed_query<E: Embedder>(
        &self,
        embedder: &E,
        text: &str,
    ) -> Result<Vec<f32>, EngineError> {
        let mut vectors = embedder.embed(&[text]).await?;
        if vectors.len() != 1 {
            return Err(EngineError::Embedding(format!(
                "embedder returned {} vectors for 1 query",
                vectors.len()
            )));
        }
        let vector = vectors.remove(0);

        if !self.vectors.is_empty() && vector.len() != self.dim {
            return Err(EngineError::DimensionMismatch {
                key: 0,
                expected: self.dim,
                got: vector.len(),
            });
        }
        Ok(vector)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector dimension `D`, 0 for an empty index.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Embedding row for record key `key`, or `None` if out of range.
    #[must_use]
    pub fn vector_of(&self, key: usize) -> Option<&[f32]> {
        self.vectors.get(key).map(Vec::as_slice)
    }
}
