use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod collect;
mod search;

#[derive(Debug, Parser)]
#[command(name = "revdex")]
#[command(about = "Sentiment-filtered semantic search over customer reviews")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect reviews from a site's reviews feed into a CSV corpus
    Collect {
        /// Site to collect from (origin is extracted from any URL)
        #[arg(long)]
        base_url: String,

        /// CSV file to write the deduplicated corpus to
        #[arg(long, default_value = "raw_reviews.csv")]
        output: PathBuf,

        /// Reviews requested per page
        #[arg(long, default_value_t = 20)]
        page_size: usize,

        /// Preview what would be fetched without network calls or file writes
        #[arg(long)]
        dry_run: bool,
    },
    /// Search the corpus for the review closest to a query
    Search {
        /// Free-text query
        query: String,

        /// CSV corpus produced by `collect`
        #[arg(long, default_value = "raw_reviews.csv")]
        corpus: PathBuf,

        /// Polarity threshold separating negative from positive
        #[arg(long, default_value_t = revdex_engine::NEGATIVE_THRESHOLD)]
        threshold: f32,

        /// Search positive reviews (polarity >= threshold) instead of negative
        #[arg(long)]
        positive: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect {
            base_url,
            output,
            page_size,
            dry_run,
        } => collect::run_collect(&base_url, &output, page_size, dry_run).await,
        Commands::Search {
            query,
            corpus,
            threshold,
            positive,
        } => search::run_search(&query, &corpus, threshold, positive).await,
    }
}
