use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransmissionError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error: {status_code} - {status_text}")]
    Api { status_code: u16, status_text: String },

    #[error("failed to negotiate a session id after repeated 409 responses")]
    SessionNegotiation,

    /// The daemon answered with a non-success `result` string. The value is
    /// free-form diagnostic text, not a stable vocabulary.
    #[error("RPC failure: {0}")]
    Rpc(String),

    #[error("failed to decode response at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request arguments: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
