//! Feed retrieval and decoding.
//!
//! Feeds are fetched as raw bytes and parsed as a JSON array of records.
//! Some servers hand back a gzip stream without saying so, so when the
//! direct parse fails the bytes are gunzipped in memory and parsed again.

use crate::error::{DecodeError, FetchError};
use crate::models::Record;
use flate2::read::GzDecoder;
use std::io::Read;
use tracing::{debug, info, instrument, warn};

/// Downloads feed payloads over HTTP.
#[derive(Debug, Clone, Default)]
pub struct FeedIngestor {
    client: reqwest::Client,
}

impl FeedIngestor {
    /// Build an ingestor, optionally sending a custom `User-Agent`.
    pub fn new(user_agent: Option<&str>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua.to_string());
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Fetch the raw body of `url`.
    ///
    /// Any status >= 400 is an error carrying the URL and status code.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        if status >= 400 {
            warn!(%url, status, "Feed request failed");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        info!(bytes = body.len(), status, "Fetched feed");
        Ok(body.to_vec())
    }
}

/// Parse a feed payload, falling back to gunzip-then-parse.
pub fn decode(raw: &[u8]) -> Result<Vec<Record>, DecodeError> {
    let json = match serde_json::from_slice::<Vec<Record>>(raw) {
        Ok(records) => return Ok(records),
        Err(e) => e,
    };
    debug!(error = %json, "Payload is not plain JSON; trying gzip");

    let mut text = Vec::new();
    if let Err(source) = GzDecoder::new(raw).read_to_end(&mut text) {
        return Err(DecodeError::Gzip { json, source });
    }
    debug!(compressed = raw.len(), decompressed = text.len(), "Gunzipped payload");

    serde_json::from_slice(&text).map_err(DecodeError::GzipJson)
}
