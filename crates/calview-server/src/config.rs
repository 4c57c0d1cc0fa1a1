//! Server configuration.
//!
//! Read from `~/.config/calview/config.toml` by default:
//!
//! ```toml
//! login_path = "/login"
//!
//! [graph]
//! endpoint = "https://graph.microsoft.com/v1.0"
//! resource_id = "https://graph.microsoft.com"
//! timeout_secs = 30
//! ```
//!
//! `graph.endpoint` and `graph.resource_id` are required.

use std::path::{Path, PathBuf};
use std::time::Duration;

use calview_providers::graph::GraphConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};
use crate::gate::DEFAULT_LOGIN_PATH;

/// Configuration for the calendar handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Login entry point redirects point at.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Remote calendar API settings.
    pub graph: GraphSettings,
}

/// Remote calendar API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Base URL of the REST API.
    pub endpoint: String,

    /// Resource identifier tokens are requested for.
    pub resource_id: String,

    /// Timeout of the remote call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    GraphConfig::DEFAULT_TIMEOUT_SECS
}

impl ServerConfig {
    /// Creates a configuration with default login path and timeout.
    pub fn new(endpoint: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            login_path: default_login_path(),
            graph: GraphSettings {
                endpoint: endpoint.into(),
                resource_id: resource_id.into(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }

    /// Loads configuration from the default path.
    pub fn load() -> ServerResult<Self> {
        Self::load_from(Self::default_path())
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServerError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ServerError::config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes back to TOML.
    pub fn to_toml(&self) -> ServerResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ServerError::config(format!("failed to serialize config: {}", e)))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calview")
            .join("config.toml")
    }

    /// Checks the login path and the remote API settings.
    pub fn validate(&self) -> ServerResult<()> {
        if !self.login_path.starts_with('/') {
            return Err(ServerError::config(format!(
                "login_path must start with '/', got '{}'",
                self.login_path
            )));
        }
        self.graph_config()
            .validate()
            .map_err(|e| ServerError::config(format!("[graph] {}", e.message())))
    }

    /// Builds the retriever configuration.
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig::new(&self.graph.endpoint, &self.graph.resource_id)
            .with_timeout(Duration::from_secs(self.graph.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
login_path = "/auth/login"

[graph]
endpoint = "https://graph.microsoft.com/v1.0"
resource_id = "https://graph.microsoft.com"
timeout_secs = 10
"#;

    #[test]
    fn parse_full_config() {
        let config = ServerConfig::from_toml(FULL).unwrap();
        assert_eq!(config.login_path, "/auth/login");
        assert_eq!(config.graph.endpoint, "https://graph.microsoft.com/v1.0");
        assert_eq!(config.graph.resource_id, "https://graph.microsoft.com");

        let graph = config.graph_config();
        assert_eq!(graph.timeout, Duration::from_secs(10));
        assert_eq!(graph.resource_id, "https://graph.microsoft.com");
    }

    #[test]
    fn optional_fields_use_defaults() {
        let config = ServerConfig::from_toml(
            r#"
[graph]
endpoint = "https://graph.microsoft.com/v1.0"
resource_id = "https://graph.microsoft.com"
"#,
        )
        .unwrap();
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.graph.timeout_secs, 30);
    }

    #[test]
    fn endpoint_and_resource_are_required() {
        let missing_resource = r#"
[graph]
endpoint = "https://graph.microsoft.com/v1.0"
"#;
        let err = ServerConfig::from_toml(missing_resource).unwrap_err();
        assert!(err.to_string().contains("resource_id"));

        assert!(ServerConfig::from_toml("login_path = \"/login\"").is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let bad_endpoint = ServerConfig::new("graph.microsoft.com", "res");
        assert!(matches!(
            bad_endpoint.validate(),
            Err(ServerError::Config { .. })
        ));

        let mut bad_login = ServerConfig::new("https://graph.microsoft.com/v1.0", "res");
        bad_login.login_path = "login".to_string();
        assert!(bad_login.validate().is_err());
    }

    #[test]
    fn load_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, FULL).unwrap();

        let config = ServerConfig::load_from(&path).unwrap();
        let reparsed = ServerConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load_from(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn default_path_format() {
        let path = ServerConfig::default_path();
        assert!(path.ends_with("calview/config.toml"));
    }
}
