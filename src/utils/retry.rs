// Retry logic with Retry-After hint support
// Author: kelexine (https://github.com/kelexine)

use backoff::{backoff::Backoff, ExponentialBackoff};
use std::fmt::Display;
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on any single wait between attempts.
const MAX_DELAY: Duration = Duration::from_secs(60);

/// Failures that know whether another attempt could succeed.
pub trait Retryable {
    fn is_retryable(&self) -> bool;

    /// Server-provided wait before the next attempt, if any.
    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

/// Parse a `Retry-After` value given in seconds ("40", "1.5").
/// HTTP-date values are not supported. Capped at 60 seconds.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    let seconds: f64 = value.trim().trim_end_matches('s').parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }

    let millis = (seconds.min(MAX_DELAY.as_secs_f64()) * 1000.0) as u64;
    Some(Duration::from_millis(millis))
}

/// Create exponential backoff configuration for retries
pub fn create_backoff() -> ExponentialBackoff {
    ExponentialBackoff {
        current_interval: Duration::from_millis(250),
        initial_interval: Duration::from_millis(250),
        randomization_factor: 0.3,
        multiplier: 2.0,
        max_interval: Duration::from_secs(10),
        max_elapsed_time: Some(Duration::from_secs(60)),
        ..Default::default()
    }
}

/// Determine if an HTTP status code is retryable
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Execute operation with retry logic
/// - Uses the failure's Retry-After hint if available
/// - Falls back to exponential backoff
/// - Gives up after `max_attempts` or on a non-retryable failure
pub async fn with_retry<F, Fut, T, E>(
    operation_name: &str,
    max_attempts: u32,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: Retryable + Display,
{
    let max_attempts = max_attempts.max(1);
    let mut backoff = create_backoff();
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!("{} succeeded on attempt {}", operation_name, attempt);
                }
                return Ok(result);
            }
            Err(err) => {
                if !err.is_retryable() || attempt >= max_attempts {
                    return Err(err);
                }

                let delay = match err.retry_after() {
                    Some(hint) => hint.min(MAX_DELAY),
                    None => match backoff.next_backoff() {
                        Some(delay) => delay,
                        None => {
                            warn!("{} exhausted its retry window after {} attempts", operation_name, attempt);
                            return Err(err);
                        }
                    },
                };

                debug!(
                    "{} failed (attempt {}): {}; retrying after {}ms",
                    operation_name,
                    attempt,
                    err,
                    delay.as_millis()
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}
