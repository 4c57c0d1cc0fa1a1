//! [`CalendarRetriever`] implementation backed by the Graph REST API.

use calview_core::{AccessCredential, EventModel};
use tracing::debug;

use crate::error::ProviderResult;
use crate::normalize::map_events;
use crate::retriever::{BoxFuture, CalendarRetriever};

use super::client::GraphCalendarClient;
use super::config::GraphConfig;

const PROVIDER_NAME: &str = "graph";

/// Retrieves the signed-in user's calendar from Graph.
///
/// Holds only immutable configuration and a connection pool, so one
/// instance can serve concurrent requests.
#[derive(Debug)]
pub struct GraphRetriever {
    client: GraphCalendarClient,
}

impl GraphRetriever {
    /// Creates a retriever for the given configuration.
    pub fn new(config: GraphConfig) -> ProviderResult<Self> {
        let client = GraphCalendarClient::new(config)
            .map_err(|e| e.with_provider(PROVIDER_NAME))?;
        Ok(Self { client })
    }

    /// The resource identifier tokens for this retriever must be scoped to.
    pub fn resource_id(&self) -> &str {
        &self.client.config().resource_id
    }
}

impl CalendarRetriever for GraphRetriever {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn get_events<'a>(
        &'a self,
        credential: &'a AccessCredential,
    ) -> BoxFuture<'a, ProviderResult<Vec<EventModel>>> {
        Box::pin(async move {
            let raw = self
                .client
                .list_events(credential)
                .await
                .map_err(|e| e.with_provider(PROVIDER_NAME))?;

            let events = map_events(&raw).map_err(|e| e.with_provider(PROVIDER_NAME))?;
            debug!(count = events.len(), "events received");
            Ok(events)
        })
    }
}
