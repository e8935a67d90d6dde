//! Sync client for the Track service.
//!
//! Translates local record changes (organizations, users, countries) into
//! HTTP calls against Track's REST API:
//! - Token-authenticated requests via reqwest
//! - Explicit per-type payload serialization (no reflection)
//! - One log event per mirrored change, info or warning by status
//!
//! The client is stateless: each call is an independent request/response
//! round trip. Non-2xx responses are returned raw to the caller; only
//! transport and configuration failures surface as errors.

pub mod client;
pub mod config;
pub mod error;
pub mod record;
pub mod types;

pub use client::TrackClient;
pub use config::TrackConfig;
pub use error::{TrackError, TrackResult};
pub use record::TrackRecord;
pub use types::{RegisterUserPayload, RegisteredUser};
