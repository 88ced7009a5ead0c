//! Keep only the records published within the last N days.

use crate::dates::parse_publish_date;
use crate::error::ParseError;
use crate::models::Record;
use crate::relative::whole_days;
use chrono::NaiveDateTime;
use tracing::debug;

/// Select the records at most `threshold_days` whole days old at `now`.
///
/// Input order is preserved. A record `threshold_days` old is kept, one
/// day older is dropped, and future-dated records are always kept. The
/// first unparseable `publish_date` fails the whole batch.
pub fn select(
    records: Vec<Record>,
    threshold_days: i64,
    now: NaiveDateTime,
) -> Result<Vec<Record>, ParseError> {
    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        let published = parse_publish_date(&record.publish_date)?;
        let days = whole_days(now - published);
        if days > threshold_days {
            continue;
        }
        debug!(days, %published, title = %record.title, "Keeping recent record");
        kept.push(record);
    }
    Ok(kept)
}
