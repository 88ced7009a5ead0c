//! Feed item model.
//!
//! A feed is a flat JSON array of objects. Every item must carry a `title`
//! and a `publish_date`; the remaining fields are only needed by some output
//! formats and are checked when a renderer asks for them.

use crate::error::RenderError;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// One item of a JSON feed.
///
/// Unknown keys in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Headline. Characters that cannot be encoded, such as a lone UTF-16
    /// surrogate escape, become U+FFFD instead of failing the feed.
    #[serde(deserialize_with = "lossy_string")]
    pub title: String,
    /// Publication time, e.g. `Fri, 7 Jul 2017 15:16:38 -0400`.
    pub publish_date: String,
    /// Link to the article (HTML output).
    pub url: Option<String>,
    /// Identifier (JSON and CSV output).
    pub id: Option<String>,
    /// Summary text (JSON and CSV output).
    pub description: Option<String>,
    /// Embedded player (CSV output).
    pub media_player: Option<MediaLink>,
    /// Thumbnails, small first then large (CSV output).
    pub media_thumbnail: Option<Vec<MediaLink>>,
    /// Keyword string (CSV output).
    pub media_keywords: Option<String>,
}

/// A `{ "url": ... }` object nested inside a record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaLink {
    pub url: String,
}

struct LossyString;

impl<'de> Visitor<'de> for LossyString {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<String, E> {
        Ok(String::from_utf8_lossy(v).into_owned())
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<String, E> {
        Ok(match String::from_utf8(v) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

// serde_json hands strings to `deserialize_byte_buf` without UTF-8
// validation, writing lone surrogates as WTF-8 bytes.
fn lossy_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_byte_buf(LossyString)
}

impl Record {
    /// Minimal record with only the fields every format needs.
    #[cfg(test)]
    pub fn new(title: impl Into<String>, publish_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            publish_date: publish_date.into(),
            url: None,
            id: None,
            description: None,
            media_player: None,
            media_thumbnail: None,
            media_keywords: None,
        }
    }

    /// Borrow an optional text field, failing with the field name when absent.
    pub fn require<'a>(
        &self,
        value: &'a Option<String>,
        field: &'static str,
        format: &'static str,
    ) -> Result<&'a str, RenderError> {
        value.as_deref().ok_or_else(|| self.missing(field, format))
    }

    /// URL of the `index`-th thumbnail.
    pub fn thumbnail_url(&self, index: usize, format: &'static str) -> Result<&str, RenderError> {
        self.media_thumbnail
            .as_ref()
            .and_then(|thumbs| thumbs.get(index))
            .map(|t| t.url.as_str())
            .ok_or_else(|| {
                self.missing(
                    if index == 0 {
                        "media_thumbnail[0].url"
                    } else {
                        "media_thumbnail[1].url"
                    },
                    format,
                )
            })
    }

    pub fn player_url(&self, format: &'static str) -> Result<&str, RenderError> {
        self.media_player
            .as_ref()
            .map(|p| p.url.as_str())
            .ok_or_else(|| self.missing("media_player.url", format))
    }

    fn missing(&self, field: &'static str, format: &'static str) -> RenderError {
        RenderError::MissingField {
            title: self.title.clone(),
            field,
            format,
        }
    }
}
