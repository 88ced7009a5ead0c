//! Error kinds raised while fetching, decoding, filtering and rendering feeds.
//!
//! None of these are recovered where they originate: the first failure
//! aborts the run and surfaces through [`AppError`] to `main`.

use thiserror::Error;

/// The HTTP layer could not deliver a usable response body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("URL {url} response: {status}")]
    Status { url: String, status: u16 },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The payload is neither a JSON record array nor gzip-compressed one.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not JSON ({json}) and not gzip: {source}")]
    Gzip {
        json: serde_json::Error,
        #[source]
        source: std::io::Error,
    },
    #[error("decompressed payload is not a JSON record array: {0}")]
    GzipJson(#[source] serde_json::Error),
}

/// A `publish_date` did not match `<weekday>, <day> <month> <year> <HH:MM:SS>`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot parse date {input:?}: {reason}")]
pub struct ParseError {
    pub input: String,
    pub reason: String,
}

impl ParseError {
    pub fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("record {title:?} has no `{field}`, required for {format} output")]
    MissingField {
        title: String,
        field: &'static str,
        format: &'static str,
    },
    #[error("record {title:?} has a bad `publish_date`: {source}")]
    Date {
        title: String,
        #[source]
        source: ParseError,
    },
    #[error("cannot serialize record {title:?}: {message}")]
    Serialize { title: String, message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("no feed URLs given on the command line or in the config file")]
    NoUrls,
    #[error("invalid feed URL {url:?}: {source}")]
    BadUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
