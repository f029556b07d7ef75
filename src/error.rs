use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Spotify client.
///
/// A resource or search request that comes back with a non-2xx status is not
/// an error; see [`crate::types::Lookup`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client id or client secret missing when a token exchange was attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The token endpoint answered with a non-2xx status.
    #[error("authentication failed with status {status}: {body}")]
    Authentication { status: StatusCode, body: String },

    /// A request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),

    /// Connection, TLS or other network level failure.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// A 2xx body that was not the expected JSON shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err)
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err)
        }
    }
}
