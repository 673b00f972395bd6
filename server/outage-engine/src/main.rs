//! Binary entrypoint: run the outage pipeline over local JSON files.
//!
//! Usage: outage-engine <outages.json> <site-info.json>
//!
//! Prints the enriched site-outage array as JSON to stdout. Exit codes:
//! 0 = success, 1 = pipeline failure, 2 = usage or input errors.

use outage_engine::{Engine, RawOutage, SiteInfo};
use std::io::{self, Write};
use std::{env, fs, process};

fn main() {
  let args: Vec<String> = env::args().skip(1).collect();
  if args.len() != 2 {
    eprintln!("usage: outage-engine <outages.json> <site-info.json>");
    process::exit(2);
  }

  let outages: Vec<RawOutage> = match load(&args[0]) {
    Ok(v) => v,
    Err(e) => {
      eprintln!("outage-engine: {}: {}", args[0], e);
      process::exit(2);
    }
  };
  let site_info: SiteInfo = match load(&args[1]) {
    Ok(v) => v,
    Err(e) => {
      eprintln!("outage-engine: {}: {}", args[1], e);
      process::exit(2);
    }
  };

  let engine = Engine::with_defaults();
  let report = match engine.run(&outages, &site_info) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("outage-engine: {}", e);
      process::exit(1);
    }
  };

  let stdout = io::stdout();
  let mut out = stdout.lock();
  if let Err(e) = serde_json::to_writer(&mut out, &report) {
    eprintln!("outage-engine: write error: {}", e);
    process::exit(1);
  }
  let _ = writeln!(out);
}

fn load<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
  let text = fs::read_to_string(path)?;
  Ok(serde_json::from_str(&text)?)
}
