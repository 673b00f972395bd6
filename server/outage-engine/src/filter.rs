//! Filtering stages: time-window cutoff and device membership.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::directory::DeviceDirectory;
use crate::error::EngineError;
use crate::types::{RawOutage, Stage};

/// Strict `begin` timestamp shape: UTC, literal `Z` suffix, mandatory
/// fractional seconds. Offset forms like `+00:00` are rejected. chrono's
/// `%.f` treats the fraction as optional (and `.%f` would read the digits as
/// raw nanoseconds), so `parse_begin` checks for the dot itself.
pub const BEGIN_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Keep the outages whose `begin` is on or after `cutoff`, preserving input
/// order.
///
/// A missing or unparsable `begin` on ANY record fails the whole call;
/// nothing is silently dropped. The first bad record reports.
pub fn within_window(
  outages: &[RawOutage],
  cutoff: DateTime<Utc>,
) -> Result<Vec<&RawOutage>, EngineError> {
  let mut kept = Vec::new();
  for (index, outage) in outages.iter().enumerate() {
    if parse_begin(outage, index)? >= cutoff {
      kept.push(outage);
    }
  }
  Ok(kept)
}

/// Keep the outages whose id names a device in the directory, preserving
/// order. Never fails: an empty directory just filters everything out.
pub fn with_known_device<'a>(
  outages: &[&'a RawOutage],
  directory: &DeviceDirectory,
) -> Vec<&'a RawOutage> {
  outages
    .iter()
    .copied()
    .filter(|outage| directory.contains(&outage.id))
    .collect()
}

fn parse_begin(outage: &RawOutage, index: usize) -> Result<DateTime<Utc>, EngineError> {
  let field = format!("outages[{}].begin", index);
  let raw = outage
    .begin
    .as_deref()
    .ok_or_else(|| EngineError::validation(Stage::TimeFilter, &field, "missing"))?;

  if !raw.contains('.') {
    return Err(EngineError::validation(
      Stage::TimeFilter,
      &field,
      &format!("invalid timestamp {:?}: missing fractional seconds", raw),
    ));
  }

  let parsed = NaiveDateTime::parse_from_str(raw, BEGIN_FORMAT).map_err(|e| {
    EngineError::validation(
      Stage::TimeFilter,
      &field,
      &format!("invalid timestamp {:?}: {}", raw, e),
    )
  })?;
  Ok(parsed.and_utc())
}
