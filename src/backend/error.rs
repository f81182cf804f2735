use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response.
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("'{url}' returned {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// The response body was not the expected JSON.
    #[error("Invalid response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl BackendError {
    /// True when the backend could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, BackendError::Connection { .. })
    }
}
