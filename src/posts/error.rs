//! Failure classification for a single fetch.

use thiserror::Error;

/// Errors that end a fetch attempt. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a status outside 200..=299.
    #[error("Bad server response: HTTP {status}")]
    BadServerResponse { status: u16 },

    /// DNS, connect, timeout or body read failure.
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Body did not match the expected array of posts.
    #[error("Decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Stable identifier for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::BadServerResponse { .. } => "bad_server_response",
            FetchError::Transport { .. } => "transport_error",
            FetchError::Decode { .. } => "decode_error",
            FetchError::Client { .. } => "client_error",
        }
    }

    pub fn is_bad_server_response(&self) -> bool {
        matches!(self, FetchError::BadServerResponse { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }
}
