//! Core types for the outage engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the outage API returns)
// ---------------------------------------------------------------------------

/// One raw outage record from `GET /outages`. Unknown fields are silently ignored.
///
/// `begin` is optional on the wire so that a null or missing value reaches the
/// time filter as a validation failure instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOutage {
  pub id: String,
  #[serde(default)]
  pub begin: Option<String>,
  #[serde(default)]
  pub end: Option<String>,
}

/// One device entry from the site-info payload. Both fields are optional on
/// the wire; presence is enforced stage by stage (membership tolerates a
/// missing id, enrichment does not).
#[derive(Debug, Clone, Deserialize)]
pub struct RawDevice {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
}

/// Site metadata from `GET /site-info/{site_id}`. A missing `devices` field
/// deserializes as an empty directory rather than an error.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteInfo {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub devices: Vec<RawDevice>,
}

// ---------------------------------------------------------------------------
// Pipeline stages
// ---------------------------------------------------------------------------

/// The three pipeline stages, in execution order. Errors and observer
/// callbacks carry one of these so callers always know which stage acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  TimeFilter,
  Membership,
  Enrich,
}

impl Stage {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::TimeFilter => "time filter",
      Self::Membership => "device membership",
      Self::Enrich => "enrichment",
    }
  }
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we submit)
// ---------------------------------------------------------------------------

/// One enriched site outage for `POST /site-outages/{site_id}`.
///
/// Built fresh by the enrichment stage; inbound records are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOutage {
  pub id: String,
  pub name: String,
  pub begin: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end: Option<String>,
}
