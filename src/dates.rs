//! Parsing of feed `publish_date` strings.
//!
//! Feeds publish dates like `Fri, 7 Jul 2017 15:16:38 -0400`. Only the first
//! five whitespace-separated tokens carry meaning; the offset (or anything
//! else after the time) is dropped and the result is a naive timestamp.

use crate::error::ParseError;
use chrono::NaiveDateTime;

const WEEKDAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Parse a `publish_date` into a naive timestamp.
///
/// The weekday token must look like an abbreviated weekday followed by a
/// comma, but it is not checked against the calendar date.
///
/// # Examples
///
/// ```ignore
/// let dt = parse_publish_date("Fri, 7 Jul 2017 15:16:38 -0400")?;
/// assert_eq!(dt.to_string(), "2017-07-07 15:16:38");
/// ```
pub fn parse_publish_date(text: &str) -> Result<NaiveDateTime, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().take(5).collect();
    let [weekday, day, month, year, time] = tokens[..] else {
        return Err(ParseError::new(
            text,
            format!("expected 5 tokens, found {}", tokens.len()),
        ));
    };

    let weekday_ok = weekday
        .strip_suffix(',')
        .is_some_and(|w| WEEKDAYS.contains(&w.to_ascii_lowercase().as_str()));
    if !weekday_ok {
        return Err(ParseError::new(text, format!("bad weekday token {weekday:?}")));
    }

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(text, format!("bad year {year:?}")));
    }

    // Dropping the weekday keeps chrono from cross-checking it against the date.
    let significant = format!("{day} {month} {year} {time}");
    NaiveDateTime::parse_from_str(&significant, "%d %b %Y %H:%M:%S")
        .map_err(|e| ParseError::new(text, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parses_and_ignores_offset() {
        let dt = parse_publish_date("Fri, 7 Jul 2017 15:16:38 -0400").unwrap();
        assert_eq!(dt.to_string(), "2017-07-07 15:16:38");
    }

    #[test]
    fn test_parses_without_offset() {
        let dt = parse_publish_date("Mon, 10 Jun 2024 09:05:01").unwrap();
        assert_eq!(
            (dt.year(), dt.month(), dt.day()),
            (2024, 6, 10)
        );
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (9, 5, 1));
    }

    #[test]
    fn test_weekday_not_checked_against_date() {
        // 7 Jul 2017 was a Friday.
        let dt = parse_publish_date("Tue, 7 Jul 2017 15:16:38").unwrap();
        assert_eq!(dt.to_string(), "2017-07-07 15:16:38");
    }

    #[test]
    fn test_calendar_fields_round_trip() {
        let inputs = [
            "Sun, 31 Dec 2023 23:59:59",
            "Thu, 29 Feb 2024 00:00:00 +0000",
            "Wed, 01 Jan 2025 12:30:45 GMT",
        ];
        for input in inputs {
            let dt = parse_publish_date(input).unwrap();
            let tokens: Vec<&str> = input.split_whitespace().collect();
            let rendered = dt.format("%d %b %Y %H:%M:%S").to_string();
            let expected = format!(
                "{:0>2} {} {} {}",
                tokens[1], tokens[2], tokens[3], tokens[4]
            );
            assert_eq!(rendered, expected, "{input}");
        }
    }

    #[test]
    fn test_too_few_tokens() {
        let err = parse_publish_date("Fri, 7 Jul 2017").unwrap_err();
        assert!(err.reason.contains("expected 5 tokens"));
    }

    #[test]
    fn test_rejects_malformed_fields() {
        for bad in [
            "Fri 7 Jul 2017 15:16:38",
            "Fri, seven Jul 2017 15:16:38",
            "Fri, 7 Jux 2017 15:16:38",
            "Fri, 7 Jul 17 15:16:38",
            "Fri, 7 Jul 2017 15:16",
            "Fri, 7 Jul 2017 25:16:38",
            "Fri, 31 Feb 2017 15:16:38",
            "",
        ] {
            assert!(parse_publish_date(bad).is_err(), "{bad:?} should fail");
        }
    }
}
