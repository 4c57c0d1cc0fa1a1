//! Server error types.

use thiserror::Error;

use calview_providers::ProviderError;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that reach the host.
///
/// Missing sessions and credentials are not errors: they come back as
/// [`crate::CalendarResponse::Redirect`].
#[derive(Debug, Error)]
pub enum ServerError {
    /// The remote calendar call failed; passed through unchanged.
    #[error("calendar retrieval failed: {0}")]
    Provider(#[from] ProviderError),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ServerError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns the provider error, if this is one.
    pub fn as_provider(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(err) => Some(err),
            _ => None,
        }
    }
}
