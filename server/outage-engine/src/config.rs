//! Engine configuration with sane defaults.

use chrono::{DateTime, TimeZone, Utc};

/// Tunable parameters for the outage pipeline.
#[derive(Debug, Clone)]
pub struct Config {
  /// Outages that began before this instant are dropped by the time filter.
  pub cutoff: DateTime<Utc>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      // 2022-01-01T00:00:00.000Z — the reporting window opens here.
      cutoff: Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
    }
  }
}
