//! Retry with exponential backoff for renderer commands.
//!
//! Only transport-level failures are retried. WebDriver error envelopes,
//! navigation failures and malformed responses are returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// Ceiling for a single backoff wait.
const MAX_DELAY: Duration = Duration::from_secs(60);

/// The wait before retry `attempt` (0-based): `backoff_base * 2^attempt`, capped at [`MAX_DELAY`].
fn backoff_delay(backoff_base: Duration, attempt: u32) -> Duration {
    backoff_base
        .saturating_mul(1u32 << attempt.min(31))
        .min(MAX_DELAY)
}

/// Returns `true` if `err` is a transient transport failure (connection reset,
/// request timeout) that is safe to retry for an idempotent command.
fn is_retriable(err: &ScraperError) -> bool {
    match err {
        ScraperError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        _ => false,
    }
}

/// Executes `operation`, retrying transient errors up to `max_retries` extra times.
///
/// The wait before retry `n` (0-based) is `backoff_base * 2^n`, never more than a minute.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base: Duration,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
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

        let delay = backoff_delay(backoff_base, attempt);
        tracing::warn!(
            attempt,
            max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "transient renderer error, retrying after backoff"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
