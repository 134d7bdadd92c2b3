//! End-to-end search pipeline orchestration.

use revdex_core::{AnnotatedRecord, SearchResult};

use crate::annotator::SentimentAnnotator;
use crate::classifier::Classifier;
use crate::embedder::Embedder;
use crate::error::EngineError;
use crate::index::EmbeddingIndex;
use crate::search::FilteredSearchEngine;
use crate::store::RecordStore;

/// Run one query through the full pipeline.
///
/// 1. Annotate every record with a polarity (one classifier batch call).
/// 2. Build the embedding index (one embedder batch call).
/// 3. Embed the query with the same embedder instance.
/// 4. Filter by `predicate`, rank by cosine similarity, map the winner
///    back to its original key.
///
/// Batch, run-to-completion, single-threaded; every stage is write-once
/// and read-only afterwards. Provider failures abort the whole run — a
/// partial annotation or embedding set would break key alignment, so there
/// is no retry or partial-continue at this layer. An empty store returns
/// `Ok(None)` without calling either provider.
///
/// # Errors
///
/// Propagates [`EngineError`] from classification, embedding, or the
/// alignment checks unrecovered.
pub async fn run_review_search<C, E, P>(
    classifier: &C,
    embedder: &E,
    store: &RecordStore,
    query: &str,
    predicate: P,
) -> Result<Option<SearchResult>, EngineError>
where
    C: Classifier,
    E: Embedder,
    P: Fn(&AnnotatedRecord) -> bool,
{
    if store.is_empty() {
        tracing::info!("corpus is empty, nothing to search");
        return Ok(None);
    }

    tracing::info!(records = store.len(), "annotating corpus sentiment");
    let annotated = SentimentAnnotator::new(classifier).annotate(store).await?;

    tracing::info!(records = store.len(), "building embedding index");
    let texts = store.texts();
    let index = EmbeddingIndex::build(embedder, &texts).await?;

    let query_embedding = index.embed_query(embedder, query).await?;

    let engine = FilteredSearchEngine::new(&annotated, &index)?;
    let result = engine.search(predicate, &query_embedding);

    match &result {
        Some(r) => tracing::info!(key = r.key, score = r.score, "search complete"),
        None => tracing::info!("search complete, no record matched the filter"),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use revdex_core::{Classification, SentimentLabel};

    use super::*;

    /// Deterministic classifier fake: polarity list is positional.
    struct FixedClassifier {
        polarities: Vec<f32>,
    }

    impl Classifier for FixedClassifier {
        async fn classify(&self, texts: &[&str]) -> Result<Vec<Classification>, EngineError> {
            assert_eq!(texts.len(), self.polarities.len());
            Ok(self
                .polarities
                .iter()
                .map(|&p| {
                    // Emit the raw (label, confidence) form the pipeline
                    // must normalize back to this polarity.
                    if p >= 0.5 {
                        Classification {
                            label: SentimentLabel::Positive,
                            score: p,
                        }
                    } else {
                        Classification {
                            label: SentimentLabel::Negative,
                            score: 1.0 - p,
                        }
                    }
                })
                .collect())
        }
    }

    /// Embedder fake with a fixed per-text vector table; the query gets
    /// its own dedicated vector.
    struct TableEmbedder {
        corpus: Vec<Vec<f32>>,
        query: Vec<f32>,
    }

    impl Embedder for TableEmbedder {
        async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EngineError> {
            if texts.len() == 1 && texts[0].starts_with("query:") {
                return Ok(vec![self.query.clone()]);
            }
            Ok(self.corpus.clone())
        }
    }

    #[tokio::test]
    async fn end_to_end_filtered_search_returns_original_key() {
        // Five records, polarities [0.9, 0.2, 0.1, 0.8, 0.3]; the < 0.5
        // filter selects {1, 2, 4}. Record 2 is closest to the query among
        // that subset even though record 3 is globally closer.
        let store = RecordStore::from_texts(vec![
            "love this monitor".to_owned(),
            "stand wobbles constantly".to_owned(),
            "dead pixels and the return was refused".to_owned(),
            "crisp panel, fast refresh".to_owned(),
            "mediocre built-in speakers".to_owned(),
        ]);
        let classifier = FixedClassifier {
            polarities: vec![0.9, 0.2, 0.1, 0.8, 0.3],
        };
        let embedder = TableEmbedder {
            corpus: vec![
                vec![0.1, 0.9],
                vec![0.4, 0.6],
                vec![0.95, 0.05], // closest negative to the query
                vec![1.0, 0.0],   // globally closest, but positive
                vec![0.2, 0.8],
            ],
            query: vec![1.0, 0.0],
        };

        let result = run_review_search(
            &classifier,
            &embedder,
            &store,
            "query: dead pixels and bad return policy",
            |r| r.polarity < 0.5,
        )
        .await
        .unwrap()
        .expect("a negative review should match");

        assert_eq!(result.key, 2);
        assert_eq!(result.text, "dead pixels and the return was refused");
        assert_eq!(store.text_of(result.key), Some(result.text.as_str()));
        assert!(result.score > 0.9);
    }

    #[tokio::test]
    async fn predicate_matching_nothing_yields_none() {
        let store =
            RecordStore::from_texts(vec!["glowing praise".to_owned(), "more praise".to_owned()]);
        let classifier = FixedClassifier {
            polarities: vec![0.9, 0.8],
        };
        let embedder = TableEmbedder {
            corpus: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            query: vec![1.0, 0.0],
        };

        let result = run_review_search(&classifier, &embedder, &store, "query: anything", |r| {
            r.polarity < 0.5
        })
        .await
        .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn empty_store_short_circuits_without_provider_calls() {
        struct PanicClassifier;
        impl Classifier for PanicClassifier {
            async fn classify(&self, _: &[&str]) -> Result<Vec<Classification>, EngineError> {
                panic!("classifier must not be called for an empty corpus");
            }
        }
        struct PanicEmbedder;
        impl Embedder for PanicEmbedder {
            async fn embed(&self, _: &[&str]) -> Result<Vec<Vec<f32>>, EngineError> {
                panic!("embedder must not be called for an empty corpus");
            }
        }

        let store = RecordStore::from_texts(Vec::<String>::new());
        let result =
            run_review_search(&PanicClassifier, &PanicEmbedder, &store, "query", |_| true)
                .await
                .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn classifier_failure_aborts_the_run() {
        struct FailingClassifier;
        impl Classifier for FailingClassifier {
            async fn classify(&self, _: &[&str]) -> Result<Vec<Classification>, EngineError> {
                Err(EngineError::Classification("provider down".to_owned()))
            }
        }

        let store = RecordStore::from_texts(vec!["one review".to_owned()]);
        let embedder = TableEmbedder {
            corpus: vec![vec![1.0]],
            query: vec![1.0],
        };
        let result =
            run_review_search(&FailingClassifier, &embedder, &store, "query", |_| true).await;
        assert!(matches!(result, Err(EngineError::Classification(_))));
    }
}
