//! CSV row output.
//!
//! Columns, in order:
//!
//! ```text
//! date,title,id,slug,player_url,image_url,image_large_url,keywords,description
//! ```
//!
//! Title and description are wrapped in double quotes and nothing else is.
//! Double quotes inside the description become single quotes; no other
//! escaping is done, so commas or quotes in other fields are emitted as-is.

use crate::dates::parse_publish_date;
use crate::error::RenderError;
use crate::models::Record;
use chrono::{Datelike, NaiveDateTime};
use itertools::Itertools;

const FORMAT: &str = "csv";

pub fn render(record: &Record) -> Result<String, RenderError> {
    let published =
        parse_publish_date(&record.publish_date).map_err(|source| RenderError::Date {
            title: record.title.clone(),
            source,
        })?;
    let id = record.require(&record.id, "id", FORMAT)?;
    let keywords = record.require(&record.media_keywords, "media_keywords", FORMAT)?;
    let description = record.require(&record.description, "description", FORMAT)?;

    let columns = [
        date_column(published),
        quoted(&record.title),
        id.to_string(),
        slug(&record.title),
        record.player_url(FORMAT)?.to_string(),
        record.thumbnail_url(0, FORMAT)?.to_string(),
        record.thumbnail_url(1, FORMAT)?.to_string(),
        keywords.to_string(),
        quoted(&description.replace('"', "'")),
    ];
    Ok(columns.iter().join(","))
}

/// `YYYY-MM-DD`, month and day each zero-padded on their own.
pub fn date_column(published: NaiveDateTime) -> String {
    format!(
        "{}-{:02}-{:02}",
        published.year(),
        published.month(),
        published.day()
    )
}

/// Lowercase, spaces to hyphens, `--` to `-` in one left-to-right pass,
/// then colons dropped.
///
/// Runs of three or more hyphens are only partly collapsed, and hyphens
/// that meet after a colon is removed are left doubled.
pub fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .replace("--", "-")
        .replace(':', "")
}

fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaLink;
    use chrono::NaiveDate;

    fn link(url: &str) -> MediaLink {
        MediaLink {
            url: url.to_string(),
        }
    }

    fn video() -> Record {
        let mut r = Record::new("Judge: Yankees Win", "Fri, 7 Jul 2017 15:16:38 -0400");
        r.id = Some("1.3306628".to_string());
        r.description = Some("He said \"wow\" twice".to_string());
        r.media_player = Some(link("https://example.com/player/1"));
        r.media_thumbnail = Some(vec![
            link("https://example.com/small.jpg"),
            link("https://example.com/large.jpg"),
        ]);
        r.media_keywords = Some("yankees judge".to_string());
        r
    }

    #[test]
    fn test_row_layout() {
        assert_eq!(
            render(&video()).unwrap(),
            "2017-07-07,\"Judge: Yankees Win\",1.3306628,judge-yankees-win,\
             https://example.com/player/1,https://example.com/small.jpg,\
             https://example.com/large.jpg,yankees judge,\"He said 'wow' twice\""
        );
    }

    #[test]
    fn test_slug_single_pass() {
        assert_eq!(slug("A--B: C"), "a-b-c");
        assert_eq!(slug("Hello World"), "hello-world");
        // "---" collapses once to "--", and "a : b" leaves "a--b" after the colon goes.
        assert_eq!(slug("x---y"), "x--y");
        assert_eq!(slug("a : b"), "a--b");
    }

    // Month and day pad independently: a two-digit month with a one-digit
    // day still pads the day.
    #[test]
    fn test_date_column_pads_month_and_day_independently() {
        let at = |y, m, d| {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        };
        assert_eq!(date_column(at(2017, 7, 7)), "2017-07-07");
        assert_eq!(date_column(at(2017, 7, 17)), "2017-07-17");
        assert_eq!(date_column(at(2017, 11, 3)), "2017-11-03");
        assert_eq!(date_column(at(2017, 12, 25)), "2017-12-25");
    }

    #[test]
    fn test_only_description_quotes_are_replaced() {
        let mut r = video();
        r.title = "Say \"hi\"".to_string();
        let row = render(&r).unwrap();
        assert!(row.contains(",\"Say \"hi\"\","));
        assert!(row.ends_with(",\"He said 'wow' twice\""));
    }

    #[test]
    fn test_requires_second_thumbnail() {
        let mut r = video();
        r.media_thumbnail = Some(vec![link("https://example.com/small.jpg")]);
        assert!(matches!(
            render(&r),
            Err(RenderError::MissingField {
                field: "media_thumbnail[1].url",
                ..
            })
        ));
    }

    #[test]
    fn test_requires_player() {
        let mut r = video();
        r.media_player = None;
        assert!(render(&r).is_err());
    }
}
