use std::time::Duration;

use reqwest::Client;

use crate::dedup::SeenTexts;
use crate::error::CollectError;
use crate::rate_limit::retry_with_backoff;
use crate::types::ReviewsPage;

/// Maximum number of pages to fetch before returning an error.
/// Prevents infinite loops on feeds that never drain.
const MAX_PAGES: usize = 200;

/// HTTP client for a site's public `reviews.json` endpoint.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx
/// responses as typed errors. Pages are numbered from 1; the crawl ends at
/// the first page whose `reviews` array is empty.
///
/// Transient errors (429, network failures) are automatically retried with
/// exponential backoff up to `max_retries` additional attempts.
pub struct ReviewsClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff.
    backoff_base_secs: u64,
}

/// Extracts the scheme+host origin from a configured base URL.
///
/// Given `"https://shop.example.com/site/monitor-reviews"`, returns
/// `"https://shop.example.com"` so `reviews.json` is always fetched from
/// the site root regardless of any path in the configured URL.
pub(crate) fn extract_site_origin(base_url: &str) -> String {
    reqwest::Url::parse(base_url).map_or_else(
        |_| {
            // fallback: take "https://host" by splitting on '/' and taking first 3 parts
            base_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}

/// Extracts the bare host from a URL, for rate-limit error reporting.
pub(crate) fn extract_domain(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    stripped.split('/').next().unwrap_or(stripped).to_owned()
}

impl ReviewsClient {
    /// Creates a `ReviewsClient` with configured timeout, `User-Agent`, and
    /// retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors; set to `0` to disable retries.
    /// `backoff_base_secs` controls the backoff schedule: the wait before
    /// the n-th retry is `backoff_base_secs * 2^(n-1)` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, CollectError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds the URL for one page of the reviews feed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::InvalidBaseUrl`] if `base_url` does not
    /// yield a usable `http(s)` origin.
    pub(crate) fn reviews_url(
        base_url: &str,
        page_size: usize,
        page: usize,
    ) -> Result<String, CollectError> {
        let origin = extract_site_origin(base_url);
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            return Err(CollectError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "expected an http(s) URL".to_owned(),
            });
        }
        Ok(format!(
            "{}/reviews.json?limit={page_size}&page={page}",
            origin.trim_end_matches('/')
        ))
    }

    /// Fetches one page of reviews, with automatic retry on transient errors.
    ///
    /// # Errors
    ///
    /// - [`CollectError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`CollectError::NotFound`] — HTTP 404 (not retried).
    /// - [`CollectError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`CollectError::Http`] — network failure after all retries exhausted.
    /// - [`CollectError::Deserialize`] — body is not a valid reviews page.
    pub async fn fetch_reviews_page(
        &self,
        base_url: &str,
        page_size: usize,
        page: usize,
    ) -> Result<ReviewsPage, CollectError> {
        let url = Self::reviews_url(base_url, page_size, page)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            self.fetch_page_once(&url)
        })
        .await
    }

    async fn fetch_page_once(&self, url: &str) -> Result<ReviewsPage, CollectError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after_secs = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);
            return Err(CollectError::RateLimited {
                domain: extract_domain(url),
                retry_after_secs,
            });
        }
        if status.as_u16() == 404 {
            return Err(CollectError::NotFound {
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(CollectError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| CollectError::Deserialize {
            context: format!("reviews page {url}"),
            source,
        })
    }

    /// Crawls the whole reviews feed and returns deduplicated review texts.
    ///
    /// Pages are fetched in order starting at 1 until the first empty page.
    /// Texts are whitespace-trimmed; blank bodies are skipped; duplicates
    /// (exact text equality) are dropped, keeping the first occurrence.
    /// The returned order is the feed's own order, so downstream keys are
    /// reproducible for an unchanged feed.
    ///
    /// # Errors
    ///
    /// Propagates any page-fetch error, plus
    /// [`CollectError::PaginationLimit`] if the feed exceeds [`MAX_PAGES`]
    /// pages without draining.
    pub async fn fetch_all_reviews(
        &self,
        base_url: &str,
        page_size: usize,
    ) -> Result<Vec<String>, CollectError> {
        let mut texts = Vec::new();
        let mut seen = SeenTexts::default();
        let mut page = 1usize;

        loop {
            if page > MAX_PAGES {
                return Err(CollectError::PaginationLimit {
                    base_url: base_url.to_owned(),
                    max_pages: MAX_PAGES,
                });
            }

            let reviews_page = self.fetch_reviews_page(base_url, page_size, page).await?;
            if reviews_page.reviews.is_empty() {
                tracing::debug!(page, "empty page, collection complete");
                break;
            }

            let mut kept = 0usize;
            for item in &reviews_page.reviews {
                let Some(body) = item.body.as_deref() else {
                    tracing::debug!(review_id = item.id, "skipping review without body");
                    continue;
                };
                let text = body.trim();
                if text.is_empty() {
                    tracing::debug!(review_id = item.id, "skipping blank review body");
                    continue;
                }
                if seen.insert(text) {
                    texts.push(text.to_owned());
                    kept += 1;
                }
            }

            tracing::info!(
                page,
                fetched = reviews_page.reviews.len(),
                kept,
                total = texts.len(),
                "collected review page"
            );
            page += 1;
        }

        Ok(texts)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
