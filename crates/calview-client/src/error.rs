//! Client error types.

use calview_server::ServerError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
    /// The remote calendar call failed.
    #[error("calendar retrieval failed: {0}")]
    Retrieval(String),
    /// A secret reference could not be resolved.
    #[error("secret error: {0}")]
    Secret(String),
}

impl From<ServerError> for ClientError {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::Config { message } => Self::Config(message),
            ServerError::Provider(err) => Self::Retrieval(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use calview_providers::ProviderError;

    use super::*;

    #[test]
    fn secret_error_display() {
        let err = ClientError::Secret("`pass show x` produced no output".to_string());
        assert_eq!(err.to_string(), "secret error: `pass show x` produced no output");
    }

    #[test]
    fn server_errors_are_mapped() {
        let config: ClientError = ServerError::config("endpoint is required").into();
        assert_eq!(
            config.to_string(),
            "configuration error: endpoint is required"
        );

        let retrieval: ClientError = ServerError::from(ProviderError::remote_api(404, "Not Found")).into();
        assert!(matches!(retrieval, ClientError::Retrieval(_)));
        assert!(retrieval.to_string().contains("[404] Not Found"));
    }
}
