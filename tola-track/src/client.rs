//! HTTP client for the Track REST API.
//!
//! Stateless, one request per call. Track's response is handed back raw so
//! callers can inspect status and body themselves; the client only picks the
//! log level from the status code.

use crate::config::TrackConfig;
use crate::error::TrackResult;
use crate::record::TrackRecord;
use crate::types::RegisterUserPayload;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use tracing::{debug, info, warn};

/// Sync client mirroring local records to Track.
pub struct TrackClient {
    client: Client,
    config: TrackConfig,
}

impl TrackClient {
    pub fn new(config: TrackConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    /// Builds a client from `TOLA_TRACK_URL` / `TOLA_TRACK_TOKEN`.
    pub fn from_env() -> TrackResult<Self> {
        Ok(Self::new(TrackConfig::from_env()?))
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    /// Registers a user on Track.
    ///
    /// Issues exactly one POST to `/accounts/register/` and returns the raw
    /// response regardless of status; the caller decides what 201 vs 403
    /// means for it.
    pub async fn register_user(&self, payload: &RegisterUserPayload) -> TrackResult<Response> {
        let url = self.url("accounts/register/");
        debug!("registering user {} on Track", payload.username);

        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_header())
            .form(payload)
            .send()
            .await?;

        Ok(resp)
    }

    /// Mirrors a newly created record to Track.
    pub async fn create_instance(&self, record: &impl TrackRecord) -> TrackResult<Response> {
        let url = self.url(&format!("api/{}/", record.model().to_lowercase()));
        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_header())
            .form(&record.payload())
            .send()
            .await?;

        Ok(self.log_outcome(record, resp))
    }

    /// Pushes an updated record to its existing Track resource.
    pub async fn update_instance(&self, record: &impl TrackRecord) -> TrackResult<Response> {
        let resp = self
            .client
            .put(&self.resource_url(record))
            .header(AUTHORIZATION, self.auth_header())
            .form(&record.payload())
            .send()
            .await?;

        Ok(self.log_outcome(record, resp))
    }

    /// Deletes the record's Track resource.
    pub async fn delete_instance(&self, record: &impl TrackRecord) -> TrackResult<Response> {
        let resp = self
            .client
            .delete(&self.resource_url(record))
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        Ok(self.log_outcome(record, resp))
    }

    /// One log event per call: 2xx logs info, anything else warns.
    fn log_outcome(&self, record: &impl TrackRecord, resp: Response) -> Response {
        let name = record.display_name();
        let id = record.record_id();
        let model = record.model();

        if resp.status().is_success() {
            info!(
                "The request for {name} (id={id}, model={model}) was successfully executed on Track."
            );
        } else {
            warn!(
                "{name} (id={id}, model={model}) could not be created/fetched successfully on/from Track."
            );
        }
        resp
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn resource_url(&self, record: &impl TrackRecord) -> String {
        self.url(&format!(
            "api/{}/{}/",
            record.model().to_lowercase(),
            record.record_id()
        ))
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.config.token)
    }
}
