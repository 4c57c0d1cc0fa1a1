//! Access credentials for the remote calendar API.

use std::fmt;

/// Value an identity store returns in place of a token that has expired.
pub const EXPIRED_SENTINEL: &str = "EXPIRED";

/// An opaque bearer token.
///
/// The token is never printed: both `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessCredential(String);

impl AccessCredential {
    /// Wraps a bearer token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token, for building the `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessCredential(<redacted>)")
    }
}

impl fmt::Display for AccessCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Outcome of asking the identity collaborator for a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenLookup {
    /// A usable token.
    Valid(AccessCredential),
    /// A token exists but has expired.
    Expired,
    /// No token is held for this caller and resource.
    Missing,
}

impl TokenLookup {
    /// Interprets the sentinel-string contract of legacy identity stores.
    ///
    /// `None` and the empty string mean missing, [`EXPIRED_SENTINEL`] means
    /// expired, anything else is the token itself.
    pub fn from_sentinel(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Self::Missing,
            Some(EXPIRED_SENTINEL) => Self::Expired,
            Some(token) => Self::Valid(AccessCredential::new(token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_are_redacted() {
        let credential = AccessCredential::new("super-secret-token");
        assert!(!format!("{:?}", credential).contains("super-secret-token"));
        assert!(!format!("{}", credential).contains("super-secret-token"));
        assert_eq!(credential.secret(), "super-secret-token");
    }

    #[test]
    fn sentinel_mapping() {
        assert_eq!(TokenLookup::from_sentinel(None), TokenLookup::Missing);
        assert_eq!(TokenLookup::from_sentinel(Some("")), TokenLookup::Missing);
        assert_eq!(
            TokenLookup::from_sentinel(Some("EXPIRED")),
            TokenLookup::Expired
        );
        assert_eq!(
            TokenLookup::from_sentinel(Some("abc")),
            TokenLookup::Valid(AccessCredential::new("abc"))
        );
    }
}
