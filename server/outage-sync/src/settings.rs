//! Worker settings: config file plus OUTAGE_* environment overrides.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::SyncError;

/// Worker settings, loaded from `config.{yaml,toml,json}` in the working
/// directory layered with `OUTAGE_*` environment variables (`OUTAGE_API_URL`,
/// `OUTAGE_RETRY__MAX_ATTEMPTS`, ...). Environment wins over the file.
///
/// ```yaml
/// api_url: "https://api.gridwatch.example"
/// api_key: "secret"
/// site_id: "norwich-pear-tree"
/// # cutoff: "2022-01-01T00:00:00Z"   # optional, engine default applies
/// # request_timeout_secs: 30
/// # retry:
/// #   max_attempts: 5
/// #   base_delay_ms: 500
/// #   max_delay_ms: 8000
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Base URL of the platform API, with or without a trailing slash.
  pub api_url: String,
  /// Value sent in the `x-api-key` header on every request.
  pub api_key: String,
  /// Site whose outages are fetched and reported.
  pub site_id: String,
  /// Optional override for the pipeline cutoff instant (RFC3339).
  #[serde(default)]
  pub cutoff: Option<DateTime<Utc>>,
  /// Per-request timeout in seconds.
  #[serde(default = "default_request_timeout_secs")]
  pub request_timeout_secs: u64,
  #[serde(default)]
  pub retry: RetrySettings,
}

/// Retry tuning for transient upstream failures.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrySettings {
  /// Total attempts, including the first one.
  #[serde(default = "default_max_attempts")]
  pub max_attempts: u32,
  #[serde(default = "default_base_delay_ms")]
  pub base_delay_ms: u64,
  #[serde(default = "default_max_delay_ms")]
  pub max_delay_ms: u64,
}

impl Settings {
  pub fn load() -> Result<Self, SyncError> {
    let settings = config::Config::builder()
      .add_source(config::File::with_name("config").required(false))
      .add_source(
        config::Environment::with_prefix("OUTAGE")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;
    Ok(settings.try_deserialize()?)
  }
}

impl Default for RetrySettings {
  fn default() -> Self {
    Self {
      max_attempts: default_max_attempts(),
      base_delay_ms: default_base_delay_ms(),
      max_delay_ms: default_max_delay_ms(),
    }
  }
}

fn default_request_timeout_secs() -> u64 {
  30
}

fn default_max_attempts() -> u32 {
  5
}

fn default_base_delay_ms() -> u64 {
  500
}

fn default_max_delay_ms() -> u64 {
  8_000
}
