//! `revdex collect` handler.

use std::path::Path;

use anyhow::Context;

use revdex_collector::{write_corpus, ReviewsClient};

/// Request timeout for review pages, seconds.
const TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "revdex/0.1";
const MAX_RETRIES: u32 = 3;
const BACKOFF_BASE_SECS: u64 = 1;

/// Crawl the reviews feed and write the deduplicated corpus CSV.
///
/// When `dry_run` is `true`, prints what would be fetched and returns
/// without touching the network or the filesystem. If the crawl yields no
/// reviews, nothing is written.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the crawl fails, or
/// the output file cannot be written.
pub(crate) async fn run_collect(
    base_url: &str,
    output: &Path,
    page_size: usize,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        println!(
            "dry-run: would collect reviews from {base_url} ({page_size} per page) into {}",
            output.display()
        );
        return Ok(());
    }

    let client = ReviewsClient::new(TIMEOUT_SECS, USER_AGENT, MAX_RETRIES, BACKOFF_BASE_SECS)
        .context("failed to build reviews client")?;

    let texts = client
        .fetch_all_reviews(base_url, page_size)
        .await
        .with_context(|| format!("review collection from {base_url} failed"))?;

    if texts.is_empty() {
        println!("no reviews collected from {base_url}; nothing written");
        return Ok(());
    }

    let written = write_corpus(output, &texts)
        .with_context(|| format!("failed to write corpus to {}", output.display()))?;

    println!("collected {written} unique reviews into {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::{Cli, Commands};

    #[test]
    fn parses_collect_defaults() {
        let cli =
            Cli::try_parse_from(["revdex", "collect", "--base-url", "https://x.com"]).unwrap();
        match cli.command {
            Commands::Collect {
                base_url,
                output,
                page_size,
                dry_run,
            } => {
                assert_eq!(base_url, "https://x.com");
                assert_eq!(output.to_str(), Some("raw_reviews.csv"));
                assert_eq!(page_size, 20);
                assert!(!dry_run);
            }
            Commands::Search { .. } => panic!("expected collect command"),
        }
    }

    #[test]
    fn parses_collect_dry_run_and_overrides() {
        let cli = Cli::try_parse_from([
            "revdex",
            "collect",
            "--base-url",
            "https://x.com",
            "--output",
            "out.csv",
            "--page-size",
            "50",
            "--dry-run",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Collect {
                dry_run: true,
                page_size: 50,
                ..
            }
        ));
    }

    #[test]
    fn collect_requires_base_url() {
        assert!(Cli::try_parse_from(["revdex", "collect"]).is_err());
    }
}
