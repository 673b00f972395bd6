//! GridWatch Outage Reporting Engine — deterministic filter/enrich pipeline.
//!
//! Ingests raw outage records plus site info (the device directory), drops
//! outages that began before the configured cutoff, drops outages for devices
//! the site does not know, and attaches device display names to what remains.
//!
//! No DB, no network; pure computation over in-memory collections. Progress
//! reporting goes through an injected observer, never a global logger.

pub mod config;
pub mod directory;
pub mod engine;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod observer;
pub mod types;

pub use config::Config;
pub use directory::DeviceDirectory;
pub use engine::Engine;
pub use error::EngineError;
pub use observer::{NoOpObserver, PipelineObserver};
pub use types::{RawDevice, RawOutage, SiteInfo, SiteOutage, Stage};
