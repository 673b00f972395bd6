//! Observer hooks for pipeline progress.
//!
//! The engine does no logging of its own; callers inject whatever sink they
//! want (the sync worker wires these callbacks to tracing).

use crate::error::EngineError;
use crate::types::Stage;

/// Callbacks invoked once per pipeline stage.
pub trait PipelineObserver {
  /// A stage finished: `kept` records survived, `dropped` were filtered out.
  fn on_stage_complete(&self, stage: Stage, kept: usize, dropped: usize);

  /// A stage failed; the error is about to be returned to the caller.
  fn on_stage_error(&self, stage: Stage, error: &EngineError);
}

/// Observer that ignores everything. Used by `Engine::run`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl PipelineObserver for NoOpObserver {
  fn on_stage_complete(&self, _stage: Stage, _kept: usize, _dropped: usize) {}

  fn on_stage_error(&self, _stage: Stage, _error: &EngineError) {}
}
