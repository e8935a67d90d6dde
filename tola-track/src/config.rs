//! Track sync configuration.

use crate::error::{TrackError, TrackResult};
use serde::{Deserialize, Serialize};

/// Environment variable holding the Track base URL.
pub const TRACK_URL_VAR: &str = "TOLA_TRACK_URL";
/// Environment variable holding the Track API token.
pub const TRACK_TOKEN_VAR: &str = "TOLA_TRACK_TOKEN";

/// Configuration for the Track sync client.
///
/// Read once at client construction; immutable afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Base URL for the Track API (e.g., "https://tolatrack.com").
    pub base_url: String,

    /// API token sent as `Authorization: Token {token}`.
    pub token: String,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tolatrack.com".to_string(),
            token: String::new(),
        }
    }
}

impl TrackConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Loads configuration from `TOLA_TRACK_URL` and `TOLA_TRACK_TOKEN`.
    pub fn from_env() -> TrackResult<Self> {
        let base_url = std::env::var(TRACK_URL_VAR)
            .map_err(|_| TrackError::Config(format!("{TRACK_URL_VAR} is not set")))?;
        let token = std::env::var(TRACK_TOKEN_VAR)
            .map_err(|_| TrackError::Config(format!("{TRACK_TOKEN_VAR} is not set")))?;
        Ok(Self { base_url, token })
    }
}
