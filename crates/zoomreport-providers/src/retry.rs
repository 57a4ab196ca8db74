//! Bounded retry with exponential backoff.
//!
//! Only transient failures are retried (see [`ProviderError::is_retryable`]),
//! and only for requests that are safe to repeat. Authentication,
//! authorization and malformed responses fail immediately.

use std::time::Duration;

use crate::error::ProviderError;

/// Retry configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_backoff: Duration,
    /// Upper bound for any single delay.
    pub max_backoff: Duration,
    /// Factor applied to the delay after each retry.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(10),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Builder: set the number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Builder: set backoff parameters.
    pub fn with_backoff(mut self, initial: Duration, max: Duration, multiplier: f64) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max;
        self.backoff_multiplier = multiplier;
        self
    }

    /// Delay before retry number `retry` (1-based).
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        if retry == 0 {
            return Duration::ZERO;
        }

        let base = self.initial_backoff.as_secs_f64();
        let delay = base * self.backoff_multiplier.powi(retry as i32 - 1);
        let max = self.max_backoff.as_secs_f64();

        Duration::from_secs_f64(delay.min(max))
    }

    /// Delay before retry number `retry` after `err`.
    ///
    /// A `Retry-After` from the server wins over the computed backoff, capped
    /// at `max_backoff`.
    pub fn delay_for(&self, err: &ProviderError, retry: u32) -> Duration {
        match err.retry_after() {
            Some(delay) => delay.min(self.max_backoff),
            None => self.backoff_delay(retry),
        }
    }

    /// Whether a request that failed with `err` after `retries_done`
    /// retries should be attempted again.
    pub fn should_retry(&self, err: &ProviderError, retries_done: u32) -> bool {
        err.is_retryable() && retries_done < self.max_retries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_and_caps() {
        let policy = RetryPolicy::default().with_backoff(
            Duration::from_secs(1),
            Duration::from_secs(5),
            2.0,
        );

        assert_eq!(policy.backoff_delay(0), Duration::ZERO);
        assert_eq!(policy.backoff_delay(1), Duration::from_secs(1));
        assert_eq!(policy.backoff_delay(2), Duration::from_secs(2));
        assert_eq!(policy.backoff_delay(3), Duration::from_secs(4));
        assert_eq!(policy.backoff_delay(4), Duration::from_secs(5));
    }

    #[test]
    fn only_transient_errors_are_retried() {
        let policy = RetryPolicy::default().with_max_retries(2);

        assert!(policy.should_retry(&ProviderError::server("503"), 0));
        assert!(policy.should_retry(&ProviderError::network("reset"), 1));
        assert!(!policy.should_retry(&ProviderError::network("reset"), 2));
        assert!(!policy.should_retry(&ProviderError::authentication("401"), 0));
        assert!(!policy.should_retry(&ProviderError::invalid_response("{"), 0));
    }

    #[test]
    fn server_requested_delay_wins_but_is_capped() {
        let policy = RetryPolicy::default().with_backoff(
            Duration::from_secs(1),
            Duration::from_secs(10),
            2.0,
        );

        let limited = ProviderError::rate_limited("429").with_retry_after(Duration::from_secs(3));
        assert_eq!(policy.delay_for(&limited, 1), Duration::from_secs(3));

        let long = ProviderError::rate_limited("429").with_retry_after(Duration::from_secs(120));
        assert_eq!(policy.delay_for(&long, 1), Duration::from_secs(10));

        let plain = ProviderError::server("503");
        assert_eq!(policy.delay_for(&plain, 2), Duration::from_secs(2));
    }

    #[test]
    fn none_never_retries() {
        let policy = RetryPolicy::none();
        assert!(!policy.should_retry(&ProviderError::server("500"), 0));
    }
}
