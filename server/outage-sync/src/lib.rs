//! GridWatch Outage Sync Worker
//!
//! Fetches outages and site info from the platform API, runs the
//! outage-engine pipeline, and submits the enriched result back. Network,
//! settings, and logging live here; the pipeline itself stays pure in
//! outage-engine.

mod api;
mod error;
mod observe;
mod retry;
mod settings;
mod worker;

pub use api::ApiClient;
pub use error::SyncError;
pub use observe::TracingObserver;
pub use retry::RetryPolicy;
pub use settings::{RetrySettings, Settings};
pub use worker::run;
