//! The per-URL pipeline: fetch, decode, keep recent items, print them.

use crate::config::Settings;
use crate::error::AppError;
use crate::ingest::{FeedIngestor, decode};
use crate::outputs::{RenderBudget, write_records};
use crate::recency::select;
use crate::utils::preview_bytes;
use chrono::NaiveDateTime;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Process every configured feed in order, writing rendered lines to `out`.
///
/// Each feed is fully fetched, decoded and filtered before the next one is
/// requested, and its lines are written before moving on. The first error
/// stops the run. `--limit` counts across all feeds; once it is used up no
/// further feeds are requested.
///
/// `clock` is read once per feed, after its payload is decoded, and that
/// instant anchors both the recency filter and the relative times rendered
/// for the feed.
///
/// Returns the number of lines written.
#[instrument(level = "info", skip_all, fields(feeds = settings.urls.len(), days = settings.days, output = %settings.output))]
pub async fn run<W, C>(
    ingestor: &FeedIngestor,
    settings: &Settings,
    clock: C,
    out: &mut W,
) -> Result<usize, AppError>
where
    W: Write,
    C: Fn() -> NaiveDateTime,
{
    let mut budget = RenderBudget::from_limit(settings.limit);
    let mut written = 0;

    for url in &settings.urls {
        if budget.is_spent() {
            debug!(%url, "Limit reached; skipping remaining feeds");
            break;
        }

        info!(%url, "Reading feed");
        let raw = ingestor.fetch(url).await?;
        let records = decode(&raw).inspect_err(|e| {
            warn!(%url, error = %e, preview = %preview_bytes(&raw, 200), "Feed payload could not be decoded");
        })?;
        let total = records.len();

        let now = clock();
        let recent = select(records, settings.days, now)?;
        info!(%url, total, recent = recent.len(), "Filtered feed");

        written += write_records(out, &recent, settings.output, now, &mut budget)?;
    }

    Ok(written)
}
