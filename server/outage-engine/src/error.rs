//! Structured error type for the outage engine.

use thiserror::Error;

use crate::types::Stage;

/// Fatal pipeline failure. "No matching outages" is not an error (the
/// pipeline returns an empty Ok result for that), so any `EngineError`
/// means the run produced nothing and must not be submitted.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error("{stage}: {field}: {reason}")]
  Validation {
    stage: Stage,
    field: String,
    reason: String,
  },
}

impl EngineError {
  pub fn validation(stage: Stage, field: &str, reason: &str) -> Self {
    Self::Validation {
      stage,
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  /// The pipeline stage that failed.
  pub fn stage(&self) -> Stage {
    match self {
      Self::Validation { stage, .. } => *stage,
    }
  }
}
