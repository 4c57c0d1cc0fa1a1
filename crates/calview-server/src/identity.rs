//! Identity collaborator contract.
//!
//! Token issuance lives outside this crate. The gate only asks "give me a
//! token for this caller and resource" and gets back a [`TokenLookup`].

use calview_core::TokenLookup;
use calview_providers::BoxFuture;

use crate::session::Caller;

/// Source of access tokens scoped to a remote resource.
///
/// Failures of the underlying store are reported as
/// [`TokenLookup::Missing`], never as errors.
pub trait IdentityProvider: Send + Sync {
    fn access_token<'a>(
        &'a self,
        caller: &'a Caller,
        resource_id: &'a str,
    ) -> BoxFuture<'a, TokenLookup>;
}

/// Adapter for stores that speak the sentinel-string contract.
///
/// The wrapped function returns `None` or `""` when no token is held, the
/// string `"EXPIRED"` for an expired token, or the token itself.
pub struct SentinelIdentity<F> {
    lookup: F,
}

impl<F> SentinelIdentity<F>
where
    F: Fn(&Caller, &str) -> Option<String> + Send + Sync,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<F> IdentityProvider for SentinelIdentity<F>
where
    F: Fn(&Caller, &str) -> Option<String> + Send + Sync,
{
    fn access_token<'a>(
        &'a self,
        caller: &'a Caller,
        resource_id: &'a str,
    ) -> BoxFuture<'a, TokenLookup> {
        let value = (self.lookup)(caller, resource_id);
        Box::pin(async move { TokenLookup::from_sentinel(value.as_deref()) })
    }
}
