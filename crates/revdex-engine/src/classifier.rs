//! Sentiment classifier provider interface and its HTTP implementation.

use revdex_core::Classification;
use serde::Serialize;

use crate::error::EngineError;

/// Maximum number of texts per classifier request.
const BATCH_SIZE: usize = 64;

/// Opaque sentiment classification capability.
///
/// Implementations must return exactly one classification per input text,
/// in input order. Any conforming implementation (HTTP inference service,
/// rule-based scorer, test fake) is substitutable.
#[allow(async_fn_in_trait)]
pub trait Classifier {
    /// Classify a batch of texts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Classification`] on provider failure; the
    /// pipeline treats this as fatal, never partially annotating.
    async fn classify(&self, texts: &[&str]) -> Result<Vec<Classification>, EngineError>;
}

impl<T: Classifier> Classifier for &T {
    async fn classify(&self, texts: &[&str]) -> Result<Vec<Classification>, EngineError> {
        (*self).classify(texts).await
    }
}

/// HTTP client for a TEI-style sequence-classification service.
pub struct HttpClassifier {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a [&'a str],
    /// Long inputs are truncated server-side to the model's max length
    /// instead of erroring.
    truncate: bool,
}

impl HttpClassifier {
    /// Create a client posting to `{classifier_url}/predict`.
    #[must_use]
    pub fn new(classifier_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{classifier_url}/predict"),
        }
    }
}

impl Classifier for HttpClassifier {
    /// Classify texts in batches of [`BATCH_SIZE`] per request.
    ///
    /// The service returns one `{label, score}` object per input, in the
    /// same order. A length mismatch in any batch is a contract violation
    /// and fails the whole call.
    async fn classify(&self, texts: &[&str]) -> Result<Vec<Classification>, EngineError> {
        let mut all_results = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let request = PredictRequest {
                inputs: chunk,
                truncate: true,
            };
            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .await
                .map_err(|e| EngineError::Classification(format!("request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(EngineError::Classification(format!(
                    "classifier returned status {}",
                    response.status()
                )));
            }

            let results: Vec<Classification> = response
                .json()
                .await
                .map_err(|e| EngineError::Classification(format!("response parse error: {e}")))?;

            if results.len() != chunk.len() {
                return Err(EngineError::Classification(format!(
                    "classifier returned {} results for {} inputs",
                    results.len(),
                    chunk.len()
                )));
            }

            all_results.extend(results);
        }

        Ok(all_results)
    }
}
