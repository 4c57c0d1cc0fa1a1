//! RawProviderEvent to EventModel mapping.
//!
//! Field mapping:
//!
//! | EventModel   | RawProviderEvent         |
//! |--------------|--------------------------|
//! | `id`         | `id`                     |
//! | `start_time` | `start.dateTime`         |
//! | `end_time`   | `end.dateTime`           |
//! | `location`   | `location.displayName`   |
//! | `subject`    | `subject`                |
//!
//! The query only asks for timed events, so a record without an id or
//! without a start/end date-time is treated as a malformed response and
//! fails the whole batch. Location and subject are optional.

use calview_core::EventModel;

use crate::error::{ProviderError, ProviderResult};
use crate::raw_event::{RawDateTime, RawProviderEvent};

/// Maps one wire record to the internal model.
///
/// # Errors
///
/// Returns a [`ProviderErrorCode::MalformedResponse`] error if the id is
/// missing or empty, or if either end of the time range is missing.
///
/// [`ProviderErrorCode::MalformedResponse`]: crate::ProviderErrorCode::MalformedResponse
pub fn map_event(raw: &RawProviderEvent) -> ProviderResult<EventModel> {
    let id = match raw.id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ProviderError::malformed_response("event without an id")),
    };

    let start = required_date_time(raw.start.as_ref(), id, "start")?;
    let end = required_date_time(raw.end.as_ref(), id, "end")?;

    let mut event = EventModel::new(id, start, end);

    if let Some(name) = raw.location.as_ref().and_then(|l| l.display_name.as_deref()) {
        event = event.with_location(name);
    }

    if let Some(ref subject) = raw.subject {
        event = event.with_subject(subject);
    }

    Ok(event)
}

/// Maps a batch, preserving order. Fails on the first malformed record.
pub fn map_events(raw: &[RawProviderEvent]) -> ProviderResult<Vec<EventModel>> {
    raw.iter().map(map_event).collect()
}

fn required_date_time<'a>(
    value: Option<&'a RawDateTime>,
    id: &str,
    field: &str,
) -> ProviderResult<&'a str> {
    value
        .and_then(|dt| dt.date_time.as_deref())
        .ok_or_else(|| {
            ProviderError::malformed_response(format!("event {} has no {} dateTime", id, field))
        })
}
