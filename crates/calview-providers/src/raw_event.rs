//! Wire records returned by the calendar REST API.
//!
//! These mirror the JSON shape produced by
//! `GET /me/calendar/events` with `odata.metadata=minimal`. Everything except
//! the container field and the event id is optional on the wire; what is
//! required for a usable event is decided in [`crate::normalize`].

use serde::{Deserialize, Serialize};

/// The response container: events are wrapped in a `value` array.
///
/// `value` has no default, so a body without it fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEventCollection {
    pub value: Vec<RawProviderEvent>,
}

/// A single event as sent by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProviderEvent {
    /// Change tag; not carried into the internal model.
    #[serde(rename = "@odata.etag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub start: Option<RawDateTime>,

    #[serde(default)]
    pub end: Option<RawDateTime>,

    #[serde(default)]
    pub location: Option<RawLocation>,

    #[serde(default)]
    pub subject: Option<String>,
}

/// A `dateTimeTimeZone` pair.
///
/// `date_time` is ISO-8601 without offset; `time_zone` names the zone it is
/// expressed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDateTime {
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// Location object; only the display name is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl RawProviderEvent {
    /// Creates a raw event with just an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Builder method to set the start and end date-times.
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = Some(RawDateTime::new(start));
        self.end = Some(RawDateTime::new(end));
        self
    }

    /// Builder method to set the location display name.
    pub fn with_location(mut self, display_name: impl Into<String>) -> Self {
        self.location = Some(RawLocation {
            display_name: Some(display_name.into()),
        });
        self
    }

    /// Builder method to set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

impl RawDateTime {
    /// Creates a date-time with no timezone name.
    pub fn new(date_time: impl Into<String>) -> Self {
        Self {
            date_time: Some(date_time.into()),
            time_zone: None,
        }
    }
}
