//! Retry with exponential backoff for transient collector errors.
//!
//! 429 responses and network-level failures are retried; 404s, unexpected
//! statuses, and parse failures are propagated immediately since retrying
//! cannot change the outcome.

use std::future::Future;
use std::time::Duration;

use crate::error::CollectError;

/// Returns `true` if `err` is a transient condition worth retrying.
fn is_retriable(err: &CollectError) -> bool {
    matches!(
        err,
        CollectError::RateLimited { .. } | CollectError::Http(_)
    )
}

/// Executes `operation`, retrying transient errors with exponential backoff.
///
/// The wait before the n-th retry is `backoff_base_secs * 2^(n-1)` seconds,
/// except that a 429 carrying a `Retry-After` longer than the computed
/// backoff is honored instead. `max_retries` is the number of additional
/// attempts after the first; with `max_retries = 2` the operation runs at
/// most 3 times.
///
/// # Errors
///
/// Returns the last error once retries are exhausted, or the first
/// non-retriable error immediately.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, CollectError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CollectError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let backoff_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        let delay_secs = match &err {
            // The server told us how long to wait; respect it if longer.
            CollectError::RateLimited {
                retry_after_secs, ..
            } => backoff_secs.max(*retry_after_secs),
            _ => backoff_secs,
        };

        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient collect error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
