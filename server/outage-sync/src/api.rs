//! HTTP client for the GridWatch platform API.

use std::time::Duration;

use outage_engine::{RawOutage, SiteInfo, SiteOutage};
use reqwest::{RequestBuilder, Response};
use tracing::warn;

use crate::error::SyncError;
use crate::retry::RetryPolicy;
use crate::settings::Settings;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Typed client for the three platform endpoints the worker uses.
pub struct ApiClient {
  http: reqwest::Client,
  base_url: String,
  api_key: String,
  retry: RetryPolicy,
}

impl ApiClient {
  pub fn new(settings: &Settings) -> Result<Self, SyncError> {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(settings.request_timeout_secs))
      .build()
      .map_err(|e| SyncError::http("building http client", e))?;

    Ok(Self {
      http,
      base_url: settings.api_url.trim_end_matches('/').to_string(),
      api_key: settings.api_key.clone(),
      retry: RetryPolicy::new(&settings.retry),
    })
  }

  /// `GET /outages` — every outage the platform knows about.
  pub async fn outages(&self) -> Result<Vec<RawOutage>, SyncError> {
    let url = self.endpoint("outages");
    let response = self.send_with_retry(&url, || self.http.get(&url)).await?;
    response
      .json()
      .await
      .map_err(|e| SyncError::http(format!("decoding {}", url), e))
  }

  /// `GET /site-info/{site_id}` — site metadata including the device list.
  pub async fn site_info(&self, site_id: &str) -> Result<SiteInfo, SyncError> {
    let url = self.endpoint(&format!("site-info/{}", site_id));
    let response = self.send_with_retry(&url, || self.http.get(&url)).await?;
    response
      .json()
      .await
      .map_err(|e| SyncError::http(format!("decoding {}", url), e))
  }

  /// `POST /site-outages/{site_id}` — submit the enriched report.
  pub async fn post_site_outages(
    &self,
    site_id: &str,
    report: &[SiteOutage],
  ) -> Result<(), SyncError> {
    let url = self.endpoint(&format!("site-outages/{}", site_id));
    self
      .send_with_retry(&url, || self.http.post(&url).json(report))
      .await?;
    Ok(())
  }

  fn endpoint(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path)
  }

  /// Send a request, retrying transport errors and 500-504 responses with
  /// capped exponential backoff. Success is any 2xx; other statuses fail
  /// immediately.
  async fn send_with_retry(
    &self,
    url: &str,
    build: impl Fn() -> RequestBuilder,
  ) -> Result<Response, SyncError> {
    let mut attempt = 0;
    loop {
      let outcome = build()
        .header(API_KEY_HEADER, self.api_key.as_str())
        .send()
        .await;

      match outcome {
        Ok(response) if response.status().is_success() => return Ok(response),
        Ok(response) => {
          let status = response.status();
          if !RetryPolicy::is_retryable(status) || attempt + 1 >= self.retry.max_attempts {
            return Err(SyncError::Status {
              url: url.to_string(),
              status,
            });
          }
          warn!(%url, %status, attempt, "transient status, backing off");
        }
        Err(e) => {
          if attempt + 1 >= self.retry.max_attempts {
            return Err(SyncError::http(format!("requesting {}", url), e));
          }
          warn!(%url, error = %e, attempt, "transport error, backing off");
        }
      }

      tokio::time::sleep(self.retry.delay(attempt)).await;
      attempt += 1;
    }
  }
}
