//! `revdex search` handler.

use std::path::Path;

use anyhow::Context;

use revdex_core::ProviderConfig;
use revdex_engine::{
    format_search_result, negative_filter, positive_filter, run_review_search, HttpClassifier,
    HttpEmbedder, RecordStore,
};

/// Resolve one query against the sentiment-filtered corpus and print the
/// result block.
///
/// Empty or whitespace-only queries are rejected here, before any provider
/// call — the engine itself passes query text through to the embedder
/// unmodified. The three failure surfaces stay distinct: a missing or
/// empty corpus reports "no data", provider errors propagate with context,
/// and a predicate matching nothing prints the dedicated no-match message.
///
/// # Errors
///
/// Returns an error for an empty query, an unreadable corpus, missing
/// provider configuration, or any provider failure.
pub(crate) async fn run_search(
    query: &str,
    corpus: &Path,
    threshold: f32,
    positive: bool,
) -> anyhow::Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("query must not be empty");
    }

    let store = RecordStore::load(corpus).with_context(|| {
        format!(
            "no data: could not read corpus {} — run `revdex collect` first",
            corpus.display()
        )
    })?;

    if store.is_empty() {
        println!(
            "no data: corpus {} has no usable reviews — run `revdex collect` first",
            corpus.display()
        );
        return Ok(());
    }

    let config = ProviderConfig::from_env().map_err(|e| anyhow::anyhow!("{e}"))?;
    let classifier = HttpClassifier::new(&config.classifier_url);
    let embedder = HttpEmbedder::new(&config.embedder_url);

    tracing::info!(
        records = store.len(),
        threshold,
        positive,
        "running filtered search"
    );

    let result = if positive {
        run_review_search(
            &classifier,
            &embedder,
            &store,
            query,
            positive_filter(threshold),
        )
        .await
    } else {
        run_review_search(
            &classifier,
            &embedder,
            &store,
            query,
            negative_filter(threshold),
        )
        .await
    }
    .context("provider failure during search")?;

    println!("{}", format_search_result(query, result.as_ref()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::{Cli, Commands};

    #[test]
    fn parses_search_defaults() {
        let cli = Cli::try_parse_from(["revdex", "search", "dead pixels"]).unwrap();
        match cli.command {
            Commands::Search {
                query,
                corpus,
                threshold,
                positive,
            } => {
                assert_eq!(query, "dead pixels");
                assert_eq!(corpus.to_str(), Some("raw_reviews.csv"));
                assert!((threshold - 0.5).abs() < f32::EPSILON);
                assert!(!positive);
            }
            Commands::Collect { .. } => panic!("expected search command"),
        }
    }

    #[test]
    fn parses_search_with_threshold_and_positive() {
        let cli = Cli::try_parse_from([
            "revdex",
            "search",
            "great value",
            "--threshold",
            "0.6",
            "--positive",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Search { positive: true, .. }
        ));
    }

    #[test]
    fn search_requires_a_query() {
        assert!(Cli::try_parse_from(["revdex", "search"]).is_err());
    }
}
