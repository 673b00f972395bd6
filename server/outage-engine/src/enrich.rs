//! Enrichment stage: attach device display names to surviving outages.

use crate::directory::DeviceDirectory;
use crate::error::EngineError;
use crate::types::{RawOutage, SiteOutage, Stage};

/// Build the outbound site-outage records, one per surviving outage, each
/// carrying the display name of its matching device (exact id equality;
/// when the site listed an id twice, the last entry won at directory build).
///
/// Output records are constructed fresh; inbound records are never mutated.
///
/// An empty input short-circuits to an empty output without looking at the
/// directory at all. With at least one record to enrich, a device entry with
/// no id anywhere in the directory is fatal, as is a missing name on the
/// device that won the match.
pub fn attach_names(
  outages: &[&RawOutage],
  directory: &DeviceDirectory,
) -> Result<Vec<SiteOutage>, EngineError> {
  if outages.is_empty() {
    return Ok(Vec::new());
  }

  if let Some(index) = directory.first_missing_id() {
    return Err(EngineError::validation(
      Stage::Enrich,
      &format!("devices[{}].id", index),
      "missing",
    ));
  }

  outages
    .iter()
    .map(|outage| {
      let entry = directory.get(&outage.id).ok_or_else(|| {
        EngineError::validation(
          Stage::Enrich,
          &format!("outage {}", outage.id),
          "no matching device in site info",
        )
      })?;

      let name = entry.name.clone().ok_or_else(|| {
        EngineError::validation(
          Stage::Enrich,
          &format!("devices[{}].name", entry.index),
          "missing",
        )
      })?;

      let begin = outage.begin.clone().ok_or_else(|| {
        EngineError::validation(
          Stage::Enrich,
          &format!("outage {}", outage.id),
          "begin missing",
        )
      })?;

      Ok(SiteOutage {
        id: outage.id.clone(),
        name,
        begin,
        end: outage.end.clone(),
      })
    })
    .collect()
}
