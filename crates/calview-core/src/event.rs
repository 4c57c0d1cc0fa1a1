//! The internal calendar event representation.
//!
//! [`EventModel`] is what the rest of the application sees once a provider
//! record has been mapped. Times are kept as the ISO-8601 strings the
//! provider returned, in the provider's own timezone.

use serde::{Deserialize, Serialize};

/// A calendar event as exposed to the presentation layer.
///
/// Values are built fresh for each retrieval and are not mutated afterwards;
/// fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventModel {
    id: String,
    start_time: String,
    end_time: String,
    location: Option<String>,
    subject: Option<String>,
}

impl EventModel {
    /// Creates an event with the given identifier and time range.
    pub fn new(
        id: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: None,
            subject: None,
        }
    }

    /// Builder method to set the location display name.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Provider-assigned identifier, stable across queries.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Start time as given by the provider.
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// End time as given by the provider.
    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    /// Location display name, if the provider returned one.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Event subject, if the provider returned one.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Returns the subject, or `"(No title)"` when absent or blank.
    pub fn display_subject(&self) -> &str {
        match self.subject.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "(No title)",
        }
    }
}
