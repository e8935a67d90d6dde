//! Track sync error types.

use thiserror::Error;

/// Result type for Track sync operations.
pub type TrackResult<T> = Result<T, TrackError>;

/// Errors that can occur when talking to Track.
///
/// HTTP-level failures (4xx/5xx) are not errors: the raw response is
/// returned to the caller and the outcome logged. Only transport and
/// configuration problems land here.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
