//! Embedding provider interface and its HTTP implementation.

use serde::Serialize;

use crate::error::EngineError;

/// Maximum number of texts per embed request.
const BATCH_SIZE: usize = 64;

/// Opaque text-embedding capability.
///
/// Implementations must return exactly one vector per input text, in input
/// order, all of the same model-defined dimension, and must be
/// deterministic for identical input. Corpus and query embeddings must come
/// from the same instance so they share one vector space.
#[allow(async_fn_in_trait)]
pub trait Embedder {
    /// Embed a batch of texts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Embedding`] on provider failure; the pipeline
    /// treats this as fatal, never partially embedding.
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EngineError>;
}

impl<T: Embedder> Embedder for &T {
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EngineError> {
        (*self).embed(texts).await
    }
}

/// HTTP client for a TEI-style embedding service.
pub struct HttpEmbedder {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [&'a str],
    /// Long inputs are truncated server-side to the model's max length
    /// instead of erroring.
    truncate: bool,
}

impl HttpEmbedder {
    /// Create a client posting to `{embedder_url}/embed`.
    #[must_use]
    pub fn new(embedder_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{embedder_url}/embed"),
        }
    }
}

impl Embedder for HttpEmbedder {
    /// Embed texts in batches of [`BATCH_SIZE`] per request.
    ///
    /// Returns one embedding vector per input text, in the same order. A
    /// length mismatch in any batch is a contract violation and fails the
    /// whole call.
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EngineError> {
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let request = EmbedRequest {
                inputs: chunk,
                truncate: true,
            };
            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .await
                .map_err(|e| EngineError::Embedding(format!("request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(EngineError::Embedding(format!(
                    "embedder returned status {}",
                    response.status()
                )));
            }

            let embeddings: Vec<Vec<f32>> = response
                .json()
                .await
                .map_err(|e| EngineError::Embedding(format!("response parse error: {e}")))?;

            if embeddings.len() != chunk.len() {
                return Err(EngineError::Embedding(format!(
                    "embedder returned {} embeddings for {} inputs",
                    embeddings.len(),
                    chunk.len()
                )));
            }

            all_embeddings.extend(embeddings);
        }

        Ok(all_embeddings)
    }
}
