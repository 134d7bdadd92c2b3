//! Polarity normalization and sentiment predicates.

use revdex_core::{AnnotatedRecord, Classification, SentimentLabel};

use crate::classifier::Classifier;
use crate::error::EngineError;
use crate::store::RecordStore;

/// Polarity threshold below which a review counts as negative.
///
/// The comparison is strict: a polarity of exactly 0.5 belongs to the
/// positive side and is NOT selected by [`negative_filter`].
pub const NEGATIVE_THRESHOLD: f32 = 0.5;

/// Collapses a `(label, confidence)` pair onto one continuous axis.
///
/// POSITIVE keeps its confidence; NEGATIVE is flipped to `1 - confidence`.
/// The result lives in `[0, 1]`: near 1 confidently positive, near 0
/// confidently negative, near 0.5 ambiguous.
#[must_use]
pub fn polarity_of(classification: Classification) -> f32 {
    match classification.label {
        SentimentLabel::Positive => classification.score,
        SentimentLabel::Negative => 1.0 - classification.score,
    }
}

/// Predicate selecting reviews with `polarity < threshold`.
#[must_use]
pub fn negative_filter(threshold: f32) -> impl Fn(&AnnotatedRecord) -> bool {
    move |record| record.polarity < threshold
}

/// Predicate selecting the complementary subset, `polarity >= threshold`.
#[must_use]
pub fn positive_filter(threshold: f32) -> impl Fn(&AnnotatedRecord) -> bool {
    move |record| record.polarity >= threshold
}

/// Wraps a [`Classifier`] and turns its raw output into annotated records.
pub struct SentimentAnnotator<C> {
    classifier: C,
}

impl<C: Classifier> SentimentAnnotator<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Classify every record in one batch call and attach polarities.
    ///
    /// Output order and length match the store exactly, so
    /// `annotated[k].key == k` for every key.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Classification`] if the provider fails or
    /// returns a different number of results than inputs. There is no
    /// partial annotation: any failure discards the whole batch.
    pub async fn annotate(&self, store: &RecordStore) -> Result<Vec<AnnotatedRecord>, EngineError> {
        if store.is_empty() {
            return Ok(Vec::new());
        }

        let texts = store.texts();
        let classifications = self.classifier.classify(&texts).await?;

        if classifications.len() != texts.len() {
            return Err(EngineError::Classification(format!(
                "classifier returned {} results for {} records",
                classifications.len(),
                texts.len()
            )));
        }

        let annotated = store
            .records()
            .iter()
            .zip(classifications)
            .map(|(record, classification)| AnnotatedRecord {
                key: record.key,
                text: record.text.clone(),
                polarity: polarity_of(classification),
            })
            .collect();

        tracing::debug!(records = store.len(), "polarity annotation complete");
        Ok(annotated)
    }
}
