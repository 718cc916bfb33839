//! Exponential backoff with jitter for the weather API call.
//!
//! Transport-level failures (connection errors, timeouts) are retried up to
//! a fixed attempt budget. HTTP responses, whatever their status, are never
//! retried here; status handling belongs to the caller.

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::error::WeatherError;

/// Default total attempt budget (initial request plus retries).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Default backoff before the first retry.
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 1_000;
/// Default cap on a single backoff sleep.
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 30_000;
/// Default upper bound on the random jitter added to each sleep.
pub const DEFAULT_MAX_JITTER_MS: u64 = 500;

/// Retry configuration.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, including the first request.
    pub max_attempts: u32,
    /// Backoff before the first retry (doubles after each failed attempt).
    pub initial_backoff: Duration,
    /// Cap on a single backoff sleep, before jitter.
    pub max_backoff: Duration,
    /// Upper bound on the uniform random jitter added to each sleep.
    pub max_jitter: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Duration::from_millis(DEFAULT_INITIAL_BACKOFF_MS),
            max_backoff: Duration::from_millis(DEFAULT_MAX_BACKOFF_MS),
            max_jitter: Duration::from_millis(DEFAULT_MAX_JITTER_MS),
        }
    }
}

impl RetryConfig {
    /// Backoff for a failed attempt (1-based): `initial * 2^(attempt-1)`,
    /// capped at `max_backoff`.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
        let backoff_ms = (self.initial_backoff.as_millis() as u64).saturating_mul(factor);
        Duration::from_millis(backoff_ms.min(self.max_backoff.as_millis() as u64))
    }

    /// Uniform random jitter in `[0, max_jitter)`.
    pub fn jitter(&self) -> Duration {
        let max_ms = self.max_jitter.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::rng().random_range(0..max_ms))
    }
}

/// Execute an HTTP request with retry on transport failures.
///
/// `operation` is re-invoked until it yields a response or the attempt
/// budget is exhausted, sleeping `backoff + jitter` between attempts. The
/// final error is wrapped in [`WeatherError::Transport`] with the attempt
/// count.
pub async fn with_retry<F, Fut>(
    config: &RetryConfig,
    operation: F,
) -> Result<reqwest::Response, WeatherError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(response) => {
                if attempt > 1 {
                    tracing::info!(attempt, "Weather request succeeded after retry");
                }
                return Ok(response);
            }
            Err(err) if attempt < config.max_attempts => {
                let delay = config.backoff_for_attempt(attempt) + config.jitter();
                tracing::warn!(
                    attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Weather request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(
                    attempts = attempt,
                    error = %err,
                    "Weather request failed, attempt budget exhausted"
                );
                return Err(WeatherError::Transport {
                    attempts: attempt,
                    source: err,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.initial_backoff, Duration::from_secs(1));
        assert_eq!(config.max_backoff, Duration::from_secs(30));
        assert_eq!(config.max_jitter, Duration::from_millis(500));
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        let config = RetryConfig::default();

        assert_eq!(config.backoff_for_attempt(1), Duration::from_secs(1));
        assert_eq!(config.backoff_for_attempt(2), Duration::from_secs(2));
        assert_eq!(config.backoff_for_attempt(3), Duration::from_secs(4));
        assert_eq!(config.backoff_for_attempt(4), Duration::from_secs(8));
    }

    #[test]
    fn backoff_is_capped_at_max() {
        let config = RetryConfig {
            max_backoff: Duration::from_secs(4),
            ..RetryConfig::default()
        };

        assert_eq!(config.backoff_for_attempt(3), Duration::from_secs(4));
        assert_eq!(config.backoff_for_attempt(10), Duration::from_secs(4));
        // Large attempt numbers must not overflow.
        assert_eq!(config.backoff_for_attempt(u32::MAX), Duration::from_secs(4));
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let config = RetryConfig::default();
        for _ in 0..100 {
            assert!(config.jitter() < config.max_jitter);
        }
    }

    #[test]
    fn zero_jitter_is_allowed() {
        let config = RetryConfig {
            max_jitter: Duration::ZERO,
            ..RetryConfig::default()
        };
        assert_eq!(config.jitter(), Duration::ZERO);
    }
}
