//! Graph calendar REST client.
//!
//! Low-level HTTP plumbing: builds the events query, sends it with the
//! bearer credential and classifies the response.

use calview_core::AccessCredential;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use crate::error::{ProviderError, ProviderResult};
use crate::raw_event::{RawEventCollection, RawProviderEvent};

use super::config::{self, GraphConfig};

/// Graph calendar API client.
#[derive(Debug)]
pub struct GraphCalendarClient {
    http_client: reqwest::Client,
    config: GraphConfig,
}

impl GraphCalendarClient {
    /// Creates a client for the given configuration.
    pub fn new(config: GraphConfig) -> ProviderResult<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("failed to create HTTP client: {}", e))
                    .with_source(e)
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Lists the signed-in user's timed events.
    ///
    /// Issues exactly one GET. Only `200 OK` counts as success; any other
    /// status is a remote API error carrying that status.
    pub async fn list_events(
        &self,
        credential: &AccessCredential,
    ) -> ProviderResult<Vec<RawProviderEvent>> {
        let url = self.config.events_url()?;
        debug!(query = %url, "Graph API query");

        let response = self
            .http_client
            .get(url)
            .bearer_auth(credential.secret())
            .header(ACCEPT, config::ACCEPT)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or_default();
            warn!(status = status.as_u16(), reason, "error received from Graph API");
            return Err(ProviderError::remote_api(status.as_u16(), reason));
        }

        let body = response.bytes().await.map_err(|e| {
            ProviderError::transport(format!("failed to read response: {}", e)).with_source(e)
        })?;
        debug!(bytes = body.len(), "response body received from Graph API");

        let collection: RawEventCollection = serde_json::from_slice(&body).map_err(|e| {
            ProviderError::malformed_response(format!("failed to parse response: {}", e))
                .with_source(e)
        })?;

        Ok(collection.value)
    }
}

fn transport_error(e: reqwest::Error) -> ProviderError {
    let message = if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        format!("request failed: {}", e)
    };
    warn!(error = %e, "error submitting request to Graph API");
    ProviderError::transport(message).with_source(e)
}
