//! Pipeline orchestrator: directory build, filters, enrichment, fail-fast.

use crate::config::Config;
use crate::directory::DeviceDirectory;
use crate::enrich;
use crate::error::EngineError;
use crate::filter;
use crate::observer::{NoOpObserver, PipelineObserver};
use crate::types::*;

/// The outage reporting engine. Stateless between runs; every run sees the
/// complete outage and site-info lists.
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Run the full pipeline: time filter, device membership, enrichment.
  ///
  /// Returns the enriched site outages, possibly empty. An error means the
  /// run produced nothing usable; there is no partial output.
  pub fn run(
    &self,
    outages: &[RawOutage],
    site_info: &SiteInfo,
  ) -> Result<Vec<SiteOutage>, EngineError> {
    self.run_observed(outages, site_info, &NoOpObserver)
  }

  /// Same as `run`, reporting per-stage progress to `observer`.
  pub fn run_observed(
    &self,
    outages: &[RawOutage],
    site_info: &SiteInfo,
    observer: &dyn PipelineObserver,
  ) -> Result<Vec<SiteOutage>, EngineError> {
    // One directory build shared by membership + enrichment.
    let directory = DeviceDirectory::build(&site_info.devices);

    let recent = match filter::within_window(outages, self.config.cutoff) {
      Ok(kept) => kept,
      Err(e) => {
        observer.on_stage_error(Stage::TimeFilter, &e);
        return Err(e);
      }
    };
    observer.on_stage_complete(Stage::TimeFilter, recent.len(), outages.len() - recent.len());

    let known = filter::with_known_device(&recent, &directory);
    observer.on_stage_complete(Stage::Membership, known.len(), recent.len() - known.len());

    let enriched = match enrich::attach_names(&known, &directory) {
      Ok(records) => records,
      Err(e) => {
        observer.on_stage_error(Stage::Enrich, &e);
        return Err(e);
      }
    };
    observer.on_stage_complete(Stage::Enrich, enriched.len(), 0);

    Ok(enriched)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::RefCell;

  fn make_outage(id: &str, begin: &str) -> RawOutage {
    RawOutage {
      id: id.into(),
      begin: Some(begin.into()),
      end: Some("2022-12-31T00:00:00.000Z".into()),
    }
  }

  fn make_site(devices: Vec<(Option<&str>, Option<&str>)>) -> SiteInfo {
    SiteInfo {
      id: Some("kingfisher".into()),
      name: Some("KingFisher".into()),
      devices: devices
        .into_iter()
        .map(|(id, name)| RawDevice {
          id: id.map(String::from),
          name: name.map(String::from),
        })
        .collect(),
    }
  }

  #[derive(Default)]
  struct RecordingObserver {
    completed: RefCell<Vec<(Stage, usize, usize)>>,
    failed: RefCell<Vec<Stage>>,
  }

  impl PipelineObserver for RecordingObserver {
    fn on_stage_complete(&self, stage: Stage, kept: usize, dropped: usize) {
      self.completed.borrow_mut().push((stage, kept, dropped));
    }

    fn on_stage_error(&self, stage: Stage, _error: &EngineError) {
      self.failed.borrow_mut().push(stage);
    }
  }

  #[test]
  fn full_pipeline_filters_and_enriches() {
    let engine = Engine::with_defaults();
    let outages = vec![
      make_outage("001", "2021-06-01T00:00:00.000Z"),
      make_outage("001", "2022-02-01T00:00:00.000Z"),
      make_outage("ghost", "2022-02-01T00:00:00.000Z"),
    ];
    let site = make_site(vec![(Some("001"), Some("Battery 1"))]);

    let report = engine.run(&outages, &site).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].id, "001");
    assert_eq!(report[0].name, "Battery 1");
    assert_eq!(report[0].begin, "2022-02-01T00:00:00.000Z");
  }

  #[test]
  fn empty_directory_yields_empty_report() {
    let engine = Engine::with_defaults();
    let outages = vec![make_outage("001", "2022-02-01T00:00:00.000Z")];
    let site = make_site(vec![]);

    let report = engine.run(&outages, &site).unwrap();
    assert!(report.is_empty());
  }

  #[test]
  fn null_begin_aborts_the_run() {
    let engine = Engine::with_defaults();
    let outages = vec![RawOutage {
      id: "001".into(),
      begin: None,
      end: None,
    }];
    let site = make_site(vec![(Some("001"), Some("Battery 1"))]);

    let err = engine.run(&outages, &site).unwrap_err();
    assert_eq!(err.stage(), Stage::TimeFilter);
  }

  #[test]
  fn malformed_device_aborts_when_records_survive() {
    let engine = Engine::with_defaults();
    let outages = vec![make_outage("001", "2022-02-01T00:00:00.000Z")];
    let site = make_site(vec![(Some("001"), Some("Battery 1")), (None, None)]);

    let err = engine.run(&outages, &site).unwrap_err();
    assert_eq!(err.stage(), Stage::Enrich);
  }

  #[test]
  fn malformed_device_is_ignored_when_nothing_survives() {
    let engine = Engine::with_defaults();
    // Everything is older than the cutoff, so enrichment never runs.
    let outages = vec![make_outage("001", "2021-06-01T00:00:00.000Z")];
    let site = make_site(vec![(None, Some("Orphan"))]);

    let report = engine.run(&outages, &site).unwrap();
    assert!(report.is_empty());
  }

  #[test]
  fn custom_cutoff_moves_the_window() {
    use chrono::TimeZone;
    use chrono::Utc;

    let engine = Engine::new(Config {
      cutoff: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
    });
    let outages = vec![
      make_outage("001", "2022-06-01T00:00:00.000Z"),
      make_outage("001", "2023-06-01T00:00:00.000Z"),
    ];
    let site = make_site(vec![(Some("001"), Some("Battery 1"))]);

    let report = engine.run(&outages, &site).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].begin, "2023-06-01T00:00:00.000Z");
  }

  #[test]
  fn observer_sees_stage_counts_in_order() {
    let engine = Engine::with_defaults();
    let outages = vec![
      make_outage("001", "2021-06-01T00:00:00.000Z"),
      make_outage("001", "2022-02-01T00:00:00.000Z"),
      make_outage("ghost", "2022-02-01T00:00:00.000Z"),
    ];
    let site = make_site(vec![(Some("001"), Some("Battery 1"))]);
    let observer = RecordingObserver::default();

    engine.run_observed(&outages, &site, &observer).unwrap();
    assert_eq!(
      *observer.completed.borrow(),
      vec![
        (Stage::TimeFilter, 2, 1),
        (Stage::Membership, 1, 1),
        (Stage::Enrich, 1, 0),
      ]
    );
    assert!(observer.failed.borrow().is_empty());
  }

  #[test]
  fn observer_sees_stage_errors() {
    let engine = Engine::with_defaults();
    let outages = vec![RawOutage {
      id: "001".into(),
      begin: None,
      end: None,
    }];
    let site = make_site(vec![(Some("001"), Some("Battery 1"))]);
    let observer = RecordingObserver::default();

    let err = engine.run_observed(&outages, &site, &observer).unwrap_err();
    assert_eq!(err.stage(), Stage::TimeFilter);
    assert_eq!(*observer.failed.borrow(), vec![Stage::TimeFilter]);
    assert!(observer.completed.borrow().is_empty());
  }
}
