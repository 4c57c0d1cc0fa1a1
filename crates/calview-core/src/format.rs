//! Output formatting for event lists.
//!
//! - **Text**: one line per event, for terminals
//! - **JSON**: the events serialized as an array

use serde::{Deserialize, Serialize};

use crate::event::EventModel;

/// Text printed when there is nothing to show.
pub const NO_EVENTS_TEXT: &str = "No events";

/// The output format for event display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Formats events in the requested format.
pub fn format_events(events: &[EventModel], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_text(events),
        OutputFormat::Json => format_json(events),
    }
}

/// Formats events as plain text lines, preserving their order.
pub fn format_text(events: &[EventModel]) -> String {
    if events.is_empty() {
        return NO_EVENTS_TEXT.to_string();
    }

    events
        .iter()
        .map(|event| {
            let mut line = format!(
                "{} - {}  {}",
                event.start_time(),
                event.end_time(),
                event.display_subject()
            );
            if let Some(location) = event.location().filter(|l| !l.is_empty()) {
                line.push_str(" @ ");
                line.push_str(location);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats events as a pretty-printed JSON array.
pub fn format_json(events: &[EventModel]) -> String {
    // Serializing plain strings and options cannot fail.
    serde_json::to_string_pretty(events).unwrap_or_else(|_| "[]".to_string())
}
