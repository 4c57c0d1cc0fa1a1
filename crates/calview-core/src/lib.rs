//! Core types: events, credentials, formatting, tracing

pub mod credential;
pub mod event;
pub mod format;
pub mod tracing;

pub use credential::{AccessCredential, EXPIRED_SENTINEL, TokenLookup};
pub use event::EventModel;
pub use format::{OutputFormat, format_events, format_json, format_text};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
