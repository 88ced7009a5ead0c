//! JSON output: one object per record with `title`, `id` and `description`.

use crate::error::RenderError;
use crate::models::Record;
use serde::Serialize;

const FORMAT: &str = "json";

#[derive(Debug, Serialize)]
struct JsonItem<'a> {
    title: &'a str,
    id: &'a str,
    description: &'a str,
}

/// Serialize the record's `title`, `id` and `description` as a compact
/// JSON object.
///
/// Output uses serde_json's compact form: no space after `,` or `:`, and
/// non-ASCII text is written as raw UTF-8 rather than `\uXXXX` escapes.
pub fn render(record: &Record) -> Result<String, RenderError> {
    let item = JsonItem {
        title: &record.title,
        id: record.require(&record.id, "id", FORMAT)?,
        description: record.require(&record.description, "description", FORMAT)?,
    };
    serde_json::to_string(&item).map_err(|e| RenderError::Serialize {
        title: record.title.clone(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_exactly_three_keys_verbatim() {
        let mut record = Record::new("Quote \"this\"", "Fri, 7 Jul 2017 15:16:38");
        record.id = Some("1.3306628".to_string());
        record.description = Some("Line one\nline two".to_string());
        record.url = Some("https://example.com/not-emitted".to_string());

        let line = render(&record).unwrap();
        assert!(!line.contains('\n'));
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            parsed,
            json!({
                "title": "Quote \"this\"",
                "id": "1.3306628",
                "description": "Line one\nline two",
            })
        );
    }

    #[test]
    fn test_compact_layout_with_raw_utf8() {
        let mut record = Record::new("Café", "Fri, 7 Jul 2017 15:16:38");
        record.id = Some("7".to_string());
        record.description = Some("naïve".to_string());
        assert_eq!(
            render(&record).unwrap(),
            r#"{"title":"Café","id":"7","description":"naïve"}"#
        );
    }

    #[test]
    fn test_missing_description() {
        let mut record = Record::new("T", "Fri, 7 Jul 2017 15:16:38");
        record.id = Some("1".to_string());
        assert!(matches!(
            render(&record),
            Err(RenderError::MissingField {
                field: "description",
                ..
            })
        ));
    }
}
