//! Graph calendar retriever configuration.

use std::time::Duration;

use url::Url;

use crate::error::{ProviderError, ProviderResult};

/// Path of the signed-in user's default calendar events, relative to the endpoint.
pub const EVENTS_PATH: &str = "/me/calendar/events";

/// Fields requested from the provider.
pub const SELECT_FIELDS: &str = "start,end,location,subject";

/// Only timed events are listed.
pub const FILTER: &str = "isAllDay eq false";

/// Most recent start first.
pub const ORDER_BY: &str = "start/dateTime desc";

/// `Accept` header asking for minimal OData metadata.
pub const ACCEPT: &str = "application/json;odata.metadata=minimal";

/// Configuration for the Graph calendar retriever.
///
/// `endpoint` and `resource_id` come from the host's configuration; there
/// are no built-in defaults for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Base URL of the REST API, e.g. `https://graph.microsoft.com/v1.0`.
    pub endpoint: String,

    /// Resource identifier access tokens must be scoped to.
    pub resource_id: String,

    /// Bound on the whole remote call, connect through body.
    pub timeout: Duration,

    /// User agent string for API requests.
    pub user_agent: String,
}

impl GraphConfig {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Creates a configuration for the given endpoint and resource.
    pub fn new(endpoint: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            resource_id: resource_id.into(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("calview/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks that the endpoint is an absolute http(s) URL and the resource
    /// identifier is set.
    pub fn validate(&self) -> ProviderResult<()> {
        if self.resource_id.trim().is_empty() {
            return Err(ProviderError::configuration("resource_id is required"));
        }
        if self.timeout.is_zero() {
            return Err(ProviderError::configuration("timeout must be greater than zero"));
        }
        self.base_url().map(|_| ())
    }

    /// Builds the full events query URL.
    ///
    /// ```text
    /// <endpoint>/me/calendar/events?$select=start,end,location,subject
    ///     &$filter=isAllDay eq false&$orderby=start/dateTime desc
    /// ```
    pub fn events_url(&self) -> ProviderResult<Url> {
        let base = self.base_url()?;
        let mut url = Url::parse(&format!(
            "{}{}",
            base.as_str().trim_end_matches('/'),
            EVENTS_PATH
        ))
        .map_err(|e| {
            ProviderError::configuration(format!("invalid events URL: {}", e)).with_source(e)
        })?;

        // Spaces become %20; `$`, `,` and `/` are left as-is.
        url.set_query(Some(&format!(
            "$select={}&$filter={}&$orderby={}",
            SELECT_FIELDS, FILTER, ORDER_BY
        )));
        Ok(url)
    }

    fn base_url(&self) -> ProviderResult<Url> {
        if self.endpoint.trim().is_empty() {
            return Err(ProviderError::configuration("endpoint is required"));
        }

        let url = Url::parse(self.endpoint.trim()).map_err(|e| {
            ProviderError::configuration(format!("invalid endpoint '{}': {}", self.endpoint, e))
                .with_source(e)
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProviderError::configuration(format!(
                "endpoint must use http or https, got '{}'",
                url.scheme()
            )));
        }

        // The events path and query are appended to the endpoint as-is.
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ProviderError::configuration(format!(
                "endpoint must not carry a query or fragment, got '{}'",
                self.endpoint
            )));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;

    fn config() -> GraphConfig {
        GraphConfig::new("https://graph.microsoft.com/v1.0", "https://graph.microsoft.com")
    }

    #[test]
    fn defaults() {
        let config = config();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("calview/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders() {
        let config = config()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn events_url_matches_query_contract() {
        let url = config().events_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.microsoft.com/v1.0/me/calendar/events\
             ?$select=start,end,location,subject\
             &$filter=isAllDay%20eq%20false\
             &$orderby=start/dateTime%20desc"
        );

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("$select".to_string(), "start,end,location,subject".to_string()),
                ("$filter".to_string(), "isAllDay eq false".to_string()),
                ("$orderby".to_string(), "start/dateTime desc".to_string()),
            ]
        );
    }

    #[test]
    fn trailing_slash_on_endpoint_is_ignored() {
        let config = GraphConfig::new("https://graph.microsoft.com/v1.0/", "res");
        assert_eq!(
            config.events_url().unwrap().path(),
            "/v1.0/me/calendar/events"
        );
    }

    #[test]
    fn endpoint_with_query_or_fragment_is_rejected() {
        for endpoint in [
            "https://graph.example.com/v1.0?tenant=x",
            "https://graph.example.com/v1.0#top",
        ] {
            let config = GraphConfig::new(endpoint, "res");
            assert_eq!(
                config.validate().unwrap_err().code(),
                ProviderErrorCode::Configuration
            );
            assert!(config.events_url().is_err());
        }
    }

    #[test]
    fn validation_errors() {
        let missing_endpoint = GraphConfig::new("", "res");
        assert_eq!(
            missing_endpoint.validate().unwrap_err().code(),
            ProviderErrorCode::Configuration
        );

        assert!(GraphConfig::new("not a url", "res").validate().is_err());
        assert!(GraphConfig::new("ftp://example.com", "res").validate().is_err());
        assert!(
            GraphConfig::new("https://graph.microsoft.com/v1.0", " ")
                .validate()
                .is_err()
        );
        assert!(
            config()
                .with_timeout(Duration::ZERO)
                .validate()
                .is_err()
        );
    }
}
