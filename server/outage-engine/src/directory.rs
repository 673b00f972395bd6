//! Device directory: id-to-device index built once per run and shared by the
//! membership and enrichment stages.

use std::collections::HashMap;

use crate::types::RawDevice;

/// One indexed device. `index` is the position in the original site-info
/// list, kept for error messages.
#[derive(Debug, Clone)]
pub struct DeviceEntry {
  pub index: usize,
  pub name: Option<String>,
}

/// Id-to-device lookup over a site's device list.
///
/// Built in input order; when two devices share an id the last entry wins.
/// Devices without an id are not indexed (membership treats them as
/// nonexistent) but the first such entry is recorded so enrichment can
/// reject the directory when it actually has records to enrich.
#[derive(Debug, Clone)]
pub struct DeviceDirectory {
  by_id: HashMap<String, DeviceEntry>,
  first_missing_id: Option<usize>,
}

impl DeviceDirectory {
  pub fn build(devices: &[RawDevice]) -> Self {
    let mut by_id = HashMap::new();
    let mut first_missing_id = None;

    for (index, device) in devices.iter().enumerate() {
      match &device.id {
        Some(id) => {
          by_id.insert(
            id.clone(),
            DeviceEntry {
              index,
              name: device.name.clone(),
            },
          );
        }
        None => {
          if first_missing_id.is_none() {
            first_missing_id = Some(index);
          }
        }
      }
    }

    Self {
      by_id,
      first_missing_id,
    }
  }

  pub fn contains(&self, id: &str) -> bool {
    self.by_id.contains_key(id)
  }

  pub fn get(&self, id: &str) -> Option<&DeviceEntry> {
    self.by_id.get(id)
  }

  /// True when no device carried an id (including the empty directory).
  pub fn is_empty(&self) -> bool {
    self.by_id.is_empty()
  }

  /// Position of the first device entry with no id, if any.
  pub fn first_missing_id(&self) -> Option<usize> {
    self.first_missing_id
  }
}
