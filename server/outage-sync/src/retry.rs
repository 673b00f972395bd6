//! Retry policy for transient upstream failures.

use std::time::Duration;

use reqwest::StatusCode;

use crate::settings::RetrySettings;

/// Capped exponential backoff over a fixed attempt budget.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
  pub max_attempts: u32,
  pub base_delay: Duration,
  pub max_delay: Duration,
}

impl RetryPolicy {
  pub fn new(settings: &RetrySettings) -> Self {
    Self {
      // Zero attempts would mean never sending the request at all.
      max_attempts: settings.max_attempts.max(1),
      base_delay: Duration::from_millis(settings.base_delay_ms),
      max_delay: Duration::from_millis(settings.max_delay_ms),
    }
  }

  /// Delay before the retry that follows `attempt` (0-indexed):
  /// `base * 2^attempt`, capped at `max_delay`.
  pub fn delay(&self, attempt: u32) -> Duration {
    let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
    self.base_delay.saturating_mul(factor).min(self.max_delay)
  }

  /// Statuses worth retrying: the transient 5xx band the platform is known
  /// to return under load.
  pub fn is_retryable(status: StatusCode) -> bool {
    matches!(status.as_u16(), 500..=504)
  }
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self::new(&RetrySettings::default())
  }
}
