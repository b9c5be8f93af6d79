use std::sync::Arc;

/// All errors that can occur while talking to the league API.
#[derive(thiserror::Error, Debug)]
pub enum LeagueError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The configured base URL cannot be used for API requests.
    #[error("invalid base url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A required configuration variable is not set.
    #[error("missing required setting {key}")]
    MissingConfig { key: &'static str },

    /// A configuration value could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    /// Error of a coalesced request still held by other callers that awaited it.
    #[error(transparent)]
    Shared(#[from] Arc<LeagueError>),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
