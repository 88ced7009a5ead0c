//! Command-line interface definitions for recent_json.
//!
//! Flags left unset fall back to the optional YAML config file, then to the
//! built-in defaults (see [`crate::config`]).

use crate::outputs::OutputFormat;
use clap::Parser;

/// Print the items of JSON feeds published in the last few days.
///
/// # Examples
///
/// ```sh
/// # Today's items as an HTML list
/// recent_json https://example.com/json/feed
///
/// # Up to ten items from the last three days, as CSV
/// recent_json -d 3 -l 10 -o csv https://example.com/json/feed
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Feed URLs, read in order
    #[arg(value_parser = parse_feed_url)]
    pub urls: Vec<String>,

    /// Log each request and the age of every kept item
    #[arg(short, long)]
    pub verbose: bool,

    /// Maximum age in whole days of printed items [default: 0, today only]
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Maximum number of items to print, 0 for no limit [default: 0]
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Output format [default: html]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,
}

fn parse_feed_url(raw: &str) -> Result<String, url::ParseError> {
    url::Url::parse(raw)?;
    Ok(raw.to_string())
}
