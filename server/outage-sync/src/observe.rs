//! tracing-backed pipeline observer.

use outage_engine::{EngineError, PipelineObserver, Stage};
use tracing::{error, info};

/// Forwards engine stage progress to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
  fn on_stage_complete(&self, stage: Stage, kept: usize, dropped: usize) {
    info!(stage = stage.as_str(), kept, dropped, "pipeline stage complete");
  }

  fn on_stage_error(&self, stage: Stage, cause: &EngineError) {
    error!(stage = stage.as_str(), %cause, "pipeline stage failed");
  }
}
