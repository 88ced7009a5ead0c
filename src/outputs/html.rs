//! HTML list-item output.

use crate::dates::parse_publish_date;
use crate::error::RenderError;
use crate::models::Record;
use crate::relative::pretty_elapsed;
use chrono::NaiveDateTime;

const FORMAT: &str = "html";

/// Render `<li><a href="{url}">{title}</a> <span>(published {ago})</span></li>`.
///
/// The title and URL are interpolated as-is; `ago` is the lowercased
/// relative time between `now` and the record's `publish_date`.
pub fn render(record: &Record, now: NaiveDateTime) -> Result<String, RenderError> {
    let url = record.require(&record.url, "url", FORMAT)?;
    let published =
        parse_publish_date(&record.publish_date).map_err(|source| RenderError::Date {
            title: record.title.clone(),
            source,
        })?;
    let ago = pretty_elapsed(now - published).to_lowercase();

    Ok(format!(
        r#"<li><a href="{url}">{title}</a> <span>(published {ago})</span></li>"#,
        title = record.title,
    ))
}
