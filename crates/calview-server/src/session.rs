//! The caller of a request, as seen by the gate.

/// Request-scoped view of the end user.
///
/// The host builds one per request from its own session layer; only the
/// authentication flag, the requested path and an optional session key are
/// visible here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    authenticated: bool,
    request_path: String,
    session_id: Option<String>,
}

impl Caller {
    /// A caller with a logged-in session.
    pub fn authenticated(request_path: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            request_path: request_path.into(),
            session_id: None,
        }
    }

    /// A caller without a session.
    pub fn anonymous(request_path: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            request_path: request_path.into(),
            session_id: None,
        }
    }

    /// Attaches the host's session key, for identity stores keyed by session.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Path the user asked for; used as the post-login return destination.
    pub fn request_path(&self) -> &str {
        &self.request_path
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }
}
