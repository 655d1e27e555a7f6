use std::io;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MasteryError {
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("token progress {text:?} does not match the expected have/max pattern")]
    PatternMismatch { text: String },

    #[error("invalid {field} {value:?} for champion {champion:?}: {source}")]
    InvalidField {
        champion: String,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("response for {account} is not valid UTF-8: {source}")]
    InvalidEncoding {
        account: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl MasteryError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedDocument(_) => "malformed_document",
            Self::PatternMismatch { .. } => "pattern_mismatch",
            Self::InvalidField { .. } => "invalid_field",
            Self::Upstream(_) => "upstream_error",
            Self::InvalidEncoding { .. } => "invalid_encoding",
            Self::Http(_) => "http_error",
            Self::Url(_) => "invalid_url",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
            Self::Internal(_) => "internal_error",
        }
    }
}
