//! CalendarRetriever trait definition.
//!
//! A retriever turns a bearer credential into the caller's events. One call
//! is one remote round trip; the returned future resolves exactly once with
//! either the complete event list or an error.

use std::future::Future;
use std::pin::Pin;

use calview_core::{AccessCredential, EventModel};

use crate::error::ProviderResult;

/// A boxed future for async trait methods, keeping the trait object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of calendar events for an authenticated caller.
///
/// Implementations must not cache results or credentials between calls and
/// must not retry: failures are reported to the caller as-is.
pub trait CalendarRetriever: Send + Sync {
    /// Returns the name of this retriever (e.g. "graph").
    fn name(&self) -> &str;

    /// Fetches the caller's non-all-day events, most recent start first.
    ///
    /// # Errors
    ///
    /// Transport, remote API or malformed-response
    /// [`ProviderError`](crate::ProviderError)s. No partial list is ever
    /// returned.
    fn get_events<'a>(
        &'a self,
        credential: &'a AccessCredential,
    ) -> BoxFuture<'a, ProviderResult<Vec<EventModel>>>;
}
