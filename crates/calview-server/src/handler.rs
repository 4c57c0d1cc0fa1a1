//! Calendar request handler.
//!
//! Runs one `GET /calendar` request end to end: session check, token
//! acquisition, remote retrieval. A redirect from either gate step returns
//! immediately and the retriever is never called.

use std::sync::Arc;

use calview_providers::CalendarRetriever;
use calview_providers::graph::GraphRetriever;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::gate::{CredentialGate, Gate};
use crate::identity::IdentityProvider;
use crate::session::Caller;
use crate::view::{CalendarResponse, CalendarView};

/// Route the host mounts the handler on.
pub const CALENDAR_ROUTE: &str = "/calendar";

/// Composes the credential gate and the retriever for each request.
///
/// Holds no per-request state; one instance serves concurrent requests.
#[derive(Clone)]
pub struct CalendarHandler {
    gate: CredentialGate,
    retriever: Arc<dyn CalendarRetriever>,
    resource_id: String,
}

impl std::fmt::Debug for CalendarHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarHandler")
            .field("gate", &self.gate)
            .field("retriever", &self.retriever.name())
            .field("resource_id", &self.resource_id)
            .finish()
    }
}

impl CalendarHandler {
    /// Creates a handler from its collaborators.
    pub fn new(
        gate: CredentialGate,
        retriever: Arc<dyn CalendarRetriever>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            gate,
            retriever,
            resource_id: resource_id.into(),
        }
    }

    /// Builds a handler backed by the Graph retriever described in `config`.
    pub fn from_config(
        config: &ServerConfig,
        identity: Arc<dyn IdentityProvider>,
    ) -> ServerResult<Self> {
        config.validate()?;
        let retriever = GraphRetriever::new(config.graph_config())?;
        let gate = CredentialGate::new(identity).with_login_path(&config.login_path);
        Ok(Self::new(gate, Arc::new(retriever), &config.graph.resource_id))
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Handles `GET /calendar`.
    ///
    /// Returns a view on success, a redirect when the caller must log in or
    /// authorize the resource, or the retriever's error unchanged.
    pub async fn handle_get_calendar(&self, caller: &Caller) -> ServerResult<CalendarResponse> {
        let span = info_span!(
            "get_calendar",
            request_id = %Uuid::new_v4(),
            path = caller.request_path()
        );
        self.run(caller).instrument(span).await
    }

    async fn run(&self, caller: &Caller) -> ServerResult<CalendarResponse> {
        info!(path = caller.request_path(), "handle GET");

        if let Gate::Redirect(redirect) = self.gate.ensure_session(caller) {
            info!(location = %redirect.location(), "redirecting to login");
            return Ok(CalendarResponse::Redirect(redirect));
        }

        let credential = match self.gate.acquire_token(caller, &self.resource_id).await {
            Gate::Pass(credential) => credential,
            Gate::Redirect(redirect) => {
                info!(location = %redirect.location(), "redirecting to token acquisition");
                return Ok(CalendarResponse::Redirect(redirect));
            }
        };

        let events = self
            .retriever
            .get_events(&credential)
            .await
            .inspect_err(|e| warn!(error = %e, "calendar retrieval failed"))?;
        info!(count = events.len(), "events received");

        Ok(CalendarResponse::Render(CalendarView::new(
            caller.request_path(),
            events,
        )))
    }
}
