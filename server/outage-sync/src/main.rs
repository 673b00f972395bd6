//! Binary entrypoint: fetch outages and site info, run the pipeline, submit.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use outage_sync::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let settings = Settings::load().context("loading configuration")?;
  let submitted = outage_sync::run(&settings).await?;
  info!(count = submitted, site_id = %settings.site_id, "site outages submitted");

  Ok(())
}
