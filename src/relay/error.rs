//! Failures that can occur while relaying a listing request

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// The configured upstream URL could not be parsed
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never completed (DNS, connect, timeout)
    #[error("error making the request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read in full
    #[error("error reading response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The body is not a JSON array of podcasts
    #[error("error decoding JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
