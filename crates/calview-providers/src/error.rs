//! Error types for calendar retrieval.
//!
//! Every failure of a remote call lands in one of three categories:
//! the request never completed ([`ProviderErrorCode::Transport`]), the remote
//! answered with something other than success ([`ProviderErrorCode::RemoteApi`]),
//! or the success body could not be understood
//! ([`ProviderErrorCode::MalformedResponse`]). None of them are retried here.

use std::fmt;
use thiserror::Error;

/// The category of a provider error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorCode {
    /// The request could not complete: connection refused, DNS, timeout.
    Transport,
    /// The remote answered with a non-success status.
    RemoteApi,
    /// Success status, but the body does not match the expected schema.
    MalformedResponse,
    /// Missing or invalid configuration.
    Configuration,
}

impl ProviderErrorCode {
    /// Returns a stable snake_case name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport_error",
            Self::RemoteApi => "remote_api_error",
            Self::MalformedResponse => "malformed_response",
            Self::Configuration => "configuration_error",
        }
    }
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error that occurred while retrieving events from a provider.
#[derive(Debug, Error)]
pub struct ProviderError {
    code: ProviderErrorCode,
    message: String,
    /// HTTP status, set for [`ProviderErrorCode::RemoteApi`].
    status: Option<u16>,
    /// The provider that generated this error (e.g. "graph").
    provider: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    /// Creates a new provider error with the given code and message.
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            provider: None,
            source: None,
        }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Transport, message)
    }

    /// Creates a remote API error for a non-success response.
    ///
    /// The message is formatted as `[<status>] <status text>`.
    pub fn remote_api(status: u16, status_text: impl AsRef<str>) -> Self {
        let text = status_text.as_ref();
        let message = if text.is_empty() {
            format!("[{}]", status)
        } else {
            format!("[{}] {}", status, text)
        };
        let mut err = Self::new(ProviderErrorCode::RemoteApi, message);
        err.status = Some(status);
        err
    }

    /// Creates a malformed response error.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::MalformedResponse, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Configuration, message)
    }

    /// Sets the provider name for this error.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Sets the source error for this error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn code(&self) -> ProviderErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status of a remote API error.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn is_transport(&self) -> bool {
        self.code == ProviderErrorCode::Transport
    }

    pub fn is_remote_api(&self) -> bool {
        self.code == ProviderErrorCode::RemoteApi
    }

    pub fn is_malformed_response(&self) -> bool {
        self.code == ProviderErrorCode::MalformedResponse
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref provider) = self.provider {
            write!(f, "[{}] ", provider)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_names() {
        assert_eq!(ProviderErrorCode::Transport.as_str(), "transport_error");
        assert_eq!(ProviderErrorCode::RemoteApi.as_str(), "remote_api_error");
        assert_eq!(
            ProviderErrorCode::MalformedResponse.as_str(),
            "malformed_response"
        );
    }

    #[test]
    fn remote_api_carries_status() {
        let err = ProviderError::remote_api(401, "Unauthorized");
        assert_eq!(err.code(), ProviderErrorCode::RemoteApi);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.message(), "[401] Unauthorized");
        assert!(err.is_remote_api());
        assert!(!err.is_transport());
    }

    #[test]
    fn remote_api_without_reason() {
        let err = ProviderError::remote_api(599, "");
        assert_eq!(err.message(), "[599]");
    }

    #[test]
    fn status_only_on_remote_api() {
        assert!(ProviderError::transport("refused").status().is_none());
        assert!(ProviderError::malformed_response("bad").status().is_none());
    }

    #[test]
    fn display_includes_provider() {
        let err = ProviderError::transport("connection refused").with_provider("graph");
        let display = format!("{}", err);
        assert!(display.contains("[graph]"));
        assert!(display.contains("transport_error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn source_is_exposed() {
        use std::error::Error;
        let io_err = std::io::Error::other("reset by peer");
        let err = ProviderError::transport("request failed").with_source(io_err);
        assert!(err.source().is_some());
    }
}
