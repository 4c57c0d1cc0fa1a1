//! CalendarRetriever trait and implementations.
//!
//! - [`CalendarRetriever`] - the seam the request handler calls
//! - [`RawProviderEvent`] - the provider's wire record
//! - [`map_event`] - translation from wire record to [`EventModel`]
//! - [`ProviderError`] - transport, remote API and malformed-response failures
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  Graph REST API  │
//! └────────┬─────────┘
//!          │ GET /me/calendar/events
//!          ▼
//! ┌──────────────────┐
//! │ GraphRetriever   │  CalendarRetriever
//! └────────┬─────────┘
//!          │
//!          ▼
//!  ┌──────────────────┐
//!  │ RawProviderEvent │
//!  └────────┬─────────┘
//!           │ map_event()
//!           ▼
//!    ┌────────────┐
//!    │ EventModel │
//!    └────────────┘
//! ```
//!
//! [`EventModel`]: calview_core::EventModel

pub mod error;
pub mod graph;
pub mod normalize;
pub mod raw_event;
pub mod retriever;

pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use normalize::{map_event, map_events};
pub use raw_event::{RawDateTime, RawEventCollection, RawLocation, RawProviderEvent};
pub use retriever::{BoxFuture, CalendarRetriever};
