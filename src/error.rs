// src/error.rs
// =============================================================================
// Error type for the library.
//
// There is no recovery anywhere in the client: every failure is handed back
// to the caller as a ClientError and the caller decides what to do.
// =============================================================================

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The organization name was empty
    #[error("organization name must not be empty")]
    EmptyOrgName,

    /// The configured API base URL does not parse
    #[error("invalid API url: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    /// The request itself failed (connection, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The payload was not the shape we expected
    #[error("unexpected payload from {url}: {source}")]
    Payload {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub(crate) fn payload(url: &str, source: serde_json::Error) -> Self {
        ClientError::Payload {
            url: url.to_string(),
            source,
        }
    }
}
