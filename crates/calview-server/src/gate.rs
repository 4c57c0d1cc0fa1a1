//! Credential gate.
//!
//! Two checks run before any remote call:
//!
//! 1. [`CredentialGate::ensure_session`]: is the caller logged in?
//! 2. [`CredentialGate::acquire_token`]: does the identity collaborator hold
//!    a usable token for the remote resource?
//!
//! A failed check produces a [`Redirect`] to the login entry point. The
//! redirect is the final outcome of the request; nothing after the gate runs.

use std::sync::Arc;

use calview_core::{AccessCredential, TokenLookup};
use tracing::debug;

use crate::identity::IdentityProvider;
use crate::session::Caller;

/// Login entry point used when the configuration does not name one.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Why the caller is being sent to the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// No logged-in session.
    AuthenticationRequired,
    /// Logged in, but no valid token for the remote resource.
    CredentialUnavailable,
}

/// A redirect directive for the host to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    reason: RedirectReason,
    login_path: String,
    return_to: String,
    resource_id: Option<String>,
}

impl Redirect {
    pub fn reason(&self) -> RedirectReason {
        self.reason
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Where the user lands after logging in.
    pub fn return_to(&self) -> &str {
        &self.return_to
    }

    /// Resource the acquisition flow must authorize, if any.
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    /// The `Location` value: `<login>?redir=<path>[&resourceId=<resource>]`,
    /// with both parameters percent-encoded.
    pub fn location(&self) -> String {
        let mut location = format!(
            "{}?redir={}",
            self.login_path,
            urlencoding::encode(&self.return_to)
        );
        if let Some(ref resource_id) = self.resource_id {
            location.push_str("&resourceId=");
            location.push_str(&urlencoding::encode(resource_id));
        }
        location
    }
}

/// Outcome of a gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate<T> {
    /// Continue with the value.
    Pass(T),
    /// Stop and redirect.
    Redirect(Redirect),
}

impl<T> Gate<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// Checks the session and obtains the access credential.
#[derive(Clone)]
pub struct CredentialGate {
    login_path: String,
    identity: Arc<dyn IdentityProvider>,
}

impl std::fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialGate")
            .field("login_path", &self.login_path)
            .finish_non_exhaustive()
    }
}

impl CredentialGate {
    /// Creates a gate redirecting to [`DEFAULT_LOGIN_PATH`].
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            identity,
        }
    }

    /// Sets the login entry point.
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Passes authenticated callers; redirects the rest to login with the
    /// requested path as return destination.
    pub fn ensure_session(&self, caller: &Caller) -> Gate<()> {
        if caller.is_authenticated() {
            return Gate::Pass(());
        }

        debug!(path = caller.request_path(), "no session, redirecting to login");
        Gate::Redirect(Redirect {
            reason: RedirectReason::AuthenticationRequired,
            login_path: self.login_path.clone(),
            return_to: caller.request_path().to_string(),
            resource_id: None,
        })
    }

    /// Asks the identity collaborator for a token scoped to `resource_id`.
    ///
    /// Expects a caller that already passed [`ensure_session`]. An expired
    /// or missing token redirects to login carrying both the return path
    /// and the resource identifier. No refresh or retry is attempted.
    ///
    /// [`ensure_session`]: Self::ensure_session
    pub async fn acquire_token(
        &self,
        caller: &Caller,
        resource_id: &str,
    ) -> Gate<AccessCredential> {
        match self.identity.access_token(caller, resource_id).await {
            TokenLookup::Valid(credential) => Gate::Pass(credential),
            lookup @ (TokenLookup::Expired | TokenLookup::Missing) => {
                debug!(
                    resource_id,
                    expired = matches!(lookup, TokenLookup::Expired),
                    "no usable access token, redirecting to acquisition"
                );
                Gate::Redirect(Redirect {
                    reason: RedirectReason::CredentialUnavailable,
                    login_path: self.login_path.clone(),
                    return_to: caller.request_path().to_string(),
                    resource_id: Some(resource_id.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SentinelIdentity;

    const RESOURCE: &str = "https://graph.microsoft.com";

    fn gate_returning(value: Option<&'static str>) -> CredentialGate {
        CredentialGate::new(Arc::new(SentinelIdentity::new(
            move |_: &Caller, _: &str| value.map(String::from),
        )))
    }

    #[test]
    fn authenticated_caller_passes() {
        let gate = gate_returning(None);
        assert_eq!(
            gate.ensure_session(&Caller::authenticated("/calendar")),
            Gate::Pass(())
        );
    }

    #[test]
    fn anonymous_caller_is_redirected_with_return_path() {
        let gate = gate_returning(None);
        let Gate::Redirect(redirect) = gate.ensure_session(&Caller::anonymous("/calendar")) else {
            panic!("expected redirect");
        };

        assert_eq!(redirect.reason(), RedirectReason::AuthenticationRequired);
        assert_eq!(redirect.return_to(), "/calendar");
        assert!(redirect.resource_id().is_none());
        assert_eq!(redirect.location(), "/login?redir=%2Fcalendar");
    }

    #[test]
    fn return_path_is_percent_encoded() {
        let gate = gate_returning(None).with_login_path("/auth/login");
        let Gate::Redirect(redirect) =
            gate.ensure_session(&Caller::anonymous("/calendar?view=week&day=1"))
        else {
            panic!("expected redirect");
        };
        assert_eq!(
            redirect.location(),
            "/auth/login?redir=%2Fcalendar%3Fview%3Dweek%26day%3D1"
        );
    }

    #[tokio::test]
    async fn valid_token_passes() {
        let gate = gate_returning(Some("tok-1"));
        let outcome = gate
            .acquire_token(&Caller::authenticated("/calendar"), RESOURCE)
            .await;
        assert_eq!(outcome, Gate::Pass(AccessCredential::new("tok-1")));
    }

    #[tokio::test]
    async fn expired_token_redirects_with_resource() {
        let gate = gate_returning(Some("EXPIRED"));
        let Gate::Redirect(redirect) = gate
            .acquire_token(&Caller::authenticated("/calendar"), RESOURCE)
            .await
        else {
            panic!("expected redirect");
        };

        assert_eq!(redirect.reason(), RedirectReason::CredentialUnavailable);
        assert_eq!(redirect.resource_id(), Some(RESOURCE));
        assert_eq!(
            redirect.location(),
            "/login?redir=%2Fcalendar&resourceId=https%3A%2F%2Fgraph.microsoft.com"
        );
    }

    #[tokio::test]
    async fn missing_or_empty_token_redirects() {
        for value in [None, Some("")] {
            let gate = gate_returning(value);
            let outcome = gate
                .acquire_token(&Caller::authenticated("/calendar"), RESOURCE)
                .await;
            assert!(outcome.is_redirect());
        }
    }

    #[test]
    fn debug_does_not_expose_identity() {
        let gate = gate_returning(Some("tok"));
        let debug = format!("{:?}", gate);
        assert!(debug.contains("/login"));
        assert!(!debug.contains("tok"));
    }
}
