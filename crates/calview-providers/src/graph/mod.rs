//! Graph calendar retriever.
//!
//! Reads the signed-in user's default calendar through the REST endpoint
//! `/me/calendar/events`. The caller supplies the bearer token; this module
//! never acquires, refreshes or stores credentials.
//!
//! # Example
//!
//! ```ignore
//! use calview_providers::graph::{GraphConfig, GraphRetriever};
//!
//! let config = GraphConfig::new(
//!     "https://graph.microsoft.com/v1.0",
//!     "https://graph.microsoft.com",
//! );
//! let retriever = GraphRetriever::new(config)?;
//! let events = retriever.get_events(&credential).await?;
//! ```

mod client;
mod config;
mod provider;

pub use client::GraphCalendarClient;
pub use config::{ACCEPT, EVENTS_PATH, FILTER, GraphConfig, ORDER_BY, SELECT_FIELDS};
pub use provider::GraphRetriever;
