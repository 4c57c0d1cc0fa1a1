//! What the handler hands to the presentation layer.

use calview_core::EventModel;
use serde::Serialize;

use crate::gate::Redirect;

/// Template the host renders the calendar list with.
pub const CALENDAR_TEMPLATE: &str = "calendar/list";

/// View model for the calendar list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    /// Template name, for the host's rendering engine.
    pub template: &'static str,
    /// Path of the request being answered.
    pub request_path: String,
    /// Events in provider order (most recent start first).
    pub events: Vec<EventModel>,
}

impl CalendarView {
    pub fn new(request_path: impl Into<String>, events: Vec<EventModel>) -> Self {
        Self {
            template: CALENDAR_TEMPLATE,
            request_path: request_path.into(),
            events,
        }
    }
}

/// Successful outcome of one calendar request.
///
/// Errors travel separately as [`crate::ServerError`], so each request ends
/// in exactly one of: a view, a redirect, or an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarResponse {
    /// Render the calendar list.
    Render(CalendarView),
    /// Send the user to the login flow.
    Redirect(Redirect),
}

impl CalendarResponse {
    pub fn as_view(&self) -> Option<&CalendarView> {
        match self {
            Self::Render(view) => Some(view),
            Self::Redirect(_) => None,
        }
    }

    pub fn as_redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Render(_) => None,
            Self::Redirect(redirect) => Some(redirect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_serializes_for_templates() {
        let view = CalendarView::new(
            "/calendar",
            vec![EventModel::new("E1", "s", "e").with_subject("Standup")],
        );
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["template"], "calendar/list");
        assert_eq!(json["requestPath"], "/calendar");
        assert_eq!(json["events"][0]["subject"], "Standup");
    }

    #[test]
    fn response_accessors() {
        let response = CalendarResponse::Render(CalendarView::new("/calendar", vec![]));
        assert!(response.as_view().is_some());
        assert!(response.as_redirect().is_none());
    }
}
