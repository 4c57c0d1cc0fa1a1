//! Secret references and the token source built on them.
//!
//! The access token given on the command line (or in `CALVIEW_TOKEN`) may
//! point somewhere else instead of holding the token itself:
//!
//! - `pass::path/in/store`: first line of `pass show path/in/store`
//! - `env::VAR_NAME`: the value of `$VAR_NAME`
//! - anything else: used as-is

use calview_core::TokenLookup;
use calview_providers::BoxFuture;
use calview_server::{Caller, IdentityProvider};
use tracing::warn;

use crate::error::{ClientError, ClientResult};

/// A parsed secret reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretRef<'a> {
    Pass(&'a str),
    Env(&'a str),
    Plain(&'a str),
}

impl<'a> SecretRef<'a> {
    pub fn parse(value: &'a str) -> Self {
        if let Some(path) = value.strip_prefix("pass::") {
            Self::Pass(path)
        } else if let Some(var) = value.strip_prefix("env::") {
            Self::Env(var)
        } else {
            Self::Plain(value)
        }
    }

    pub fn resolve(&self) -> ClientResult<String> {
        match *self {
            Self::Pass(path) => resolve_pass(path),
            Self::Env(var) => std::env::var(var).map_err(|_| {
                ClientError::Secret(format!("environment variable `{}` is not set", var))
            }),
            Self::Plain(value) => Ok(value.to_string()),
        }
    }
}

/// Resolves a value that may be a secret reference.
pub fn resolve(value: &str) -> ClientResult<String> {
    SecretRef::parse(value).resolve()
}

fn resolve_pass(path: &str) -> ClientResult<String> {
    let output = std::process::Command::new("pass")
        .arg("show")
        .arg(path)
        .output()
        .map_err(|e| ClientError::Secret(format!("failed to run `pass show {}`: {}", path, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ClientError::Secret(format!(
            "`pass show {}` failed ({}): {}",
            path,
            output.status,
            stderr.trim()
        )));
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(str::to_string)
        .ok_or_else(|| ClientError::Secret(format!("`pass show {}` produced no output", path)))
}

/// Token source backed by a single secret reference.
///
/// Stands in for the web host's identity store: the same token is returned
/// for every caller and resource. A reference that cannot be resolved
/// counts as a missing token.
#[derive(Debug, Clone, Default)]
pub struct SecretIdentity {
    reference: Option<String>,
}

impl SecretIdentity {
    pub fn new(reference: Option<String>) -> Self {
        Self { reference }
    }

    fn lookup(&self) -> TokenLookup {
        let Some(ref reference) = self.reference else {
            return TokenLookup::Missing;
        };
        match resolve(reference) {
            Ok(value) => TokenLookup::from_sentinel(Some(value.trim())),
            Err(e) => {
                warn!(error = %e, "could not resolve access token");
                TokenLookup::Missing
            }
        }
    }
}

impl IdentityProvider for SecretIdentity {
    fn access_token<'a>(
        &'a self,
        _caller: &'a Caller,
        _resource_id: &'a str,
    ) -> BoxFuture<'a, TokenLookup> {
        let lookup = self.lookup();
        Box::pin(async move { lookup })
    }
}

#[cfg(test)]
mod tests {
    use calview_core::AccessCredential;

    use super::*;

    #[test]
    fn parse_prefixes() {
        assert_eq!(SecretRef::parse("pass::graph/token"), SecretRef::Pass("graph/token"));
        assert_eq!(SecretRef::parse("env::TOKEN"), SecretRef::Env("TOKEN"));
        assert_eq!(SecretRef::parse("eyJ0eXAi"), SecretRef::Plain("eyJ0eXAi"));
    }

    #[test]
    fn plain_text_passthrough() {
        assert_eq!(resolve("abc").unwrap(), "abc");
        assert_eq!(resolve("").unwrap(), "");
    }

    #[test]
    fn env_prefix_resolves() {
        unsafe {
            std::env::set_var("_CALVIEW_TEST_TOKEN", "from-env");
        }
        assert_eq!(resolve("env::_CALVIEW_TEST_TOKEN").unwrap(), "from-env");
        unsafe {
            std::env::remove_var("_CALVIEW_TEST_TOKEN");
        }
    }

    #[test]
    fn env_prefix_missing_var_errors() {
        let err = resolve("env::_CALVIEW_NONEXISTENT_VAR_12345").unwrap_err();
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn pass_prefix_unknown_entry_errors() {
        // Fails whether or not `pass` is installed.
        assert!(resolve("pass::nonexistent/calview/entry/12345").is_err());
    }

    #[tokio::test]
    async fn identity_lookups() {
        let caller = Caller::authenticated("/calendar");

        let none = SecretIdentity::new(None);
        assert_eq!(none.access_token(&caller, "res").await, TokenLookup::Missing);

        let plain = SecretIdentity::new(Some("tok-1".to_string()));
        assert_eq!(
            plain.access_token(&caller, "res").await,
            TokenLookup::Valid(AccessCredential::new("tok-1"))
        );

        let expired = SecretIdentity::new(Some("EXPIRED".to_string()));
        assert_eq!(expired.access_token(&caller, "res").await, TokenLookup::Expired);

        let unresolved = SecretIdentity::new(Some("env::_CALVIEW_UNSET_TOKEN_98765".to_string()));
        assert_eq!(
            unresolved.access_token(&caller, "res").await,
            TokenLookup::Missing
        );
    }
}
