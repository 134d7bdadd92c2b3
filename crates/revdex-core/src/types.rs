use serde::Deserialize;

/// A single review in the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Dense zero-based key, stable for the lifetime of the session.
    /// Keys form the contiguous range `[0, N)` with no gaps.
    pub key: usize,
    /// Review text. Never empty after ingest.
    pub text: String,
}

/// A review with its normalized sentiment polarity attached.
///
/// Polarity lives in `[0.0, 1.0]`: values near 1 are confidently positive,
/// values near 0 confidently negative, values near 0.5 ambiguous. Created
/// once after classification and never re-scored.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecord {
    pub key: usize,
    pub text: String,
    pub polarity: f32,
}

/// Binary sentiment label as returned by the classifier provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// One raw classifier output: a label and the provider's confidence in it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    /// Confidence in `[0.0, 1.0]`.
    pub score: f32,
}

/// The best match for one query, keyed into the *original* corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Key into the original record store, never into a filtered subset.
    pub key: usize,
    /// Cosine similarity between the query and the matched review, in `[-1, 1]`.
    pub score: f32,
    /// Text of the matched review.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_label_deserializes_uppercase() {
        let c: Classification =
            serde_json::from_str(r#"{"label": "POSITIVE", "score": 0.93}"#).unwrap();
        assert_eq!(c.label, SentimentLabel::Positive);
        assert!((c.score - 0.93).abs() < 1e-6);
    }

    #[test]
    fn sentiment_label_rejects_unknown_variant() {
        let result: Result<Classification, _> =
            serde_json::from_str(r#"{"label": "NEUTRAL", "score": 0.5}"#);
        assert!(result.is_err(), "NEUTRAL is not a valid label");
    }
}
