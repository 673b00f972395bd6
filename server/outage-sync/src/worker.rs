//! End-to-end sync flow: fetch, filter/enrich, submit.

use outage_engine::{Config, Engine};
use tracing::info;

use crate::api::ApiClient;
use crate::error::SyncError;
use crate::observe::TracingObserver;
use crate::settings::Settings;

/// Fetch outages and site info, run the pipeline, and submit the enriched
/// report. Returns the number of site outages submitted.
///
/// Fail-fast: any fetch, pipeline, or submit error aborts the run with
/// nothing submitted.
pub async fn run(settings: &Settings) -> Result<usize, SyncError> {
  let client = ApiClient::new(settings)?;

  info!(site_id = %settings.site_id, "fetching outages and site info");
  let outages = client.outages().await?;
  let site_info = client.site_info(&settings.site_id).await?;
  info!(
    outages = outages.len(),
    devices = site_info.devices.len(),
    "fetched platform data"
  );

  let mut config = Config::default();
  if let Some(cutoff) = settings.cutoff {
    config.cutoff = cutoff;
  }
  let engine = Engine::new(config);
  let report = engine.run_observed(&outages, &site_info, &TracingObserver)?;

  info!(count = report.len(), "submitting enriched site outages");
  client.post_site_outages(&settings.site_id, &report).await?;

  Ok(report.len())
}
