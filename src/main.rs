//! # recent_json
//!
//! Reads JSON article feeds and prints the items published in the last few
//! days as HTML list items, JSON objects or CSV rows.
//!
//! ## Usage
//!
//! ```sh
//! recent_json -d 1 -l 5 -o html https://example.com/json/feed
//! ```
//!
//! ## Pipeline
//!
//! For each feed URL, in order:
//! 1. **Fetch**: download the raw payload
//! 2. **Decode**: parse it as a JSON array, gunzipping first if needed
//! 3. **Filter**: keep items at most `--days` whole days old
//! 4. **Render**: print one line per item until `--limit` is reached
//!
//! Rendered lines go to stdout; logs go to stderr.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod app;
mod cli;
mod config;
mod dates;
mod error;
mod ingest;
mod models;
mod outputs;
mod recency;
mod relative;
mod utils;

use cli::Cli;
use config::{FileSettings, Settings};
use ingest::FeedIngestor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // --- Tracing init ---
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    debug!(?args, "Parsed CLI arguments");

    let file_settings = match args.config.as_deref() {
        Some(path) => FileSettings::load(path).inspect_err(|e| {
            error!(path, error = %e, "Failed to load config file");
        })?,
        None => FileSettings::default(),
    };
    let settings = Settings::resolve(&args, file_settings)?;
    let ingestor = FeedIngestor::new(settings.user_agent.as_deref())?;

    let clock = || Local::now().naive_local();
    let mut stdout = std::io::stdout().lock();

    match app::run(&ingestor, &settings, clock, &mut stdout).await {
        Ok(written) => {
            let elapsed = start_time.elapsed();
            info!(written, ?elapsed, "Execution complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            Err(e.into())
        }
    }
}
