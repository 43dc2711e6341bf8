//! Retry with backoff
//!
//! Only idempotent reads are retried by [`crate::HttpClient`], and only when
//! a [`RetryConfig`] is configured. The default policy makes three attempts
//! with a linear `1000ms * attempt` delay between them.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Delay growth between attempts
#[derive(Debug, Clone, PartialEq)]
pub enum Backoff {
    /// `base_delay * attempt`
    Linear,
    /// `base_delay * multiplier^(attempt - 1)`, capped at `max_delay`
    Exponential {
        /// Growth factor per attempt
        multiplier: f64,
        /// Upper bound for a single delay
        max_delay: Duration,
    },
}

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total number of attempts, the first one included
    pub max_attempts: usize,
    /// Delay unit between attempts
    pub base_delay: Duration,
    /// How the delay grows
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_attempts: 3, base_delay: Duration::from_millis(1000), backoff: Backoff::Linear }
    }
}

impl RetryConfig {
    /// Create a retry configuration with the given attempt budget
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts, ..Default::default() }
    }

    /// Set the base delay
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Switch to exponential backoff
    pub fn with_exponential_backoff(mut self, multiplier: f64, max_delay: Duration) -> Self {
        self.backoff = Backoff::Exponential { multiplier, max_delay };
        self
    }

    /// Delay to wait after the given failed attempt (1-based)
    pub fn delay_after(&self, attempt: usize) -> Duration {
        let attempt = attempt.max(1);
        match &self.backoff {
            Backoff::Linear => self.base_delay.saturating_mul(attempt as u32),
            Backoff::Exponential { multiplier, max_delay } => {
                let delay_ms =
                    self.base_delay.as_millis() as f64 * multiplier.powi(attempt as i32 - 1);
                let delay = Duration::from_millis(delay_ms as u64);
                if delay > *max_delay {
                    *max_delay
                } else {
                    delay
                }
            }
        }
    }
}

/// Retry an async operation with a configurable retry policy
///
/// # Arguments
/// * `config` - Retry configuration
/// * `should_retry` - Function to determine if an error should be retried
/// * `operation` - The async operation to retry
///
/// # Examples
/// ```
/// use resonance_client::{retry, RetryConfig};
///
/// async fn example() -> Result<String, String> {
///     retry(&RetryConfig::new(3), |_: &String| true, || async {
///         Ok("success".to_string())
///     })
///     .await
/// }
/// ```
pub async fn retry<F, Fut, T, E>(
    config: &RetryConfig,
    should_retry: impl Fn(&E) -> bool,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0;

    loop {
        attempt += 1;
        match operation().await {
            Ok(result) => return Ok(result),
            Err(err) => {
                if !should_retry(&err) || attempt >= config.max_attempts {
                    return Err(err);
                }

                let delay = config.delay_after(attempt);
                tracing::warn!(attempt, delay_ms = delay.as_millis() as u64, "retrying request");
                sleep(delay).await;
            }
        }
    }
}
