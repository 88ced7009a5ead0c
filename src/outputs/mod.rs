//! Rendering of selected records, one output line per record.
//!
//! # Submodules
//!
//! - [`html`]: `<li>` list items with a relative publication time
//! - [`json`]: one compact JSON object per record
//! - [`csv`]: one comma-separated row per record with derived columns
//!
//! Every format writes lines to stdout in selection order, stopping once the
//! run's `--limit` budget is spent.

pub mod csv;
pub mod html;
pub mod json;

use crate::error::{AppError, RenderError};
use crate::models::Record;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::io::Write;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

/// Render a single record in `format`.
pub fn render(
    format: OutputFormat,
    record: &Record,
    now: NaiveDateTime,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Html => html::render(record, now),
        OutputFormat::Json => json::render(record),
        OutputFormat::Csv => csv::render(record),
    }
}

/// How many more records may be rendered in this run.
///
/// A limit of zero or less means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderBudget {
    remaining: Option<usize>,
}

impl RenderBudget {
    pub fn from_limit(limit: i64) -> Self {
        if limit <= 0 {
            return Self::unlimited();
        }
        Self {
            remaining: Some(usize::try_from(limit).unwrap_or(usize::MAX)),
        }
    }

    pub fn unlimited() -> Self {
        Self { remaining: None }
    }

    pub fn is_spent(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Claim one slot, returning `false` once the limit is reached.
    fn take(&mut self) -> bool {
        match self.remaining.as_mut() {
            None => true,
            Some(0) => false,
            Some(n) => {
                *n -= 1;
                true
            }
        }
    }
}

/// Write each record in `format` to `out`, one per line, while the budget
/// allows. Returns the number of lines written.
///
/// Lines already written stay written if a later record fails to render.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[Record],
    format: OutputFormat,
    now: NaiveDateTime,
    budget: &mut RenderBudget,
) -> Result<usize, AppError> {
    let mut written = 0;
    for record in records {
        if !budget.take() {
            break;
        }
        let line = render(format, record, now)?;
        writeln!(out, "{line}")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
