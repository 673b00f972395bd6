//! Structured error types for the sync worker.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
  #[error("config: {0}")]
  Config(#[from] config::ConfigError),

  #[error("{context}: {source}")]
  Http {
    context: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("{url}: unexpected status {status}")]
  Status {
    url: String,
    status: reqwest::StatusCode,
  },

  #[error("pipeline: {0}")]
  Pipeline(#[from] outage_engine::EngineError),
}

impl SyncError {
  pub fn http(context: impl Into<String>, source: reqwest::Error) -> Self {
    Self::Http {
      context: context.into(),
      source,
    }
  }
}
