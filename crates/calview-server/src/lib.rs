//! Calendar request handling.
//!
//! This crate is the piece a web host mounts on `GET /calendar`:
//! - [`CredentialGate`] checks the session and obtains a bearer token
//! - [`CalendarHandler`] runs the gate, then the [`CalendarRetriever`]
//! - [`CalendarResponse`] tells the host to render a view or redirect
//!
//! Routing, session storage, token issuance and template rendering belong
//! to the host and reach this crate only through [`Caller`] and
//! [`IdentityProvider`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use calview_server::{CalendarHandler, CalendarResponse, Caller, SentinelIdentity, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::load()?;
//!     let identity = Arc::new(SentinelIdentity::new(|_caller: &Caller, _resource: &str| {
//!         Some("token-from-session".to_string())
//!     }));
//!     let handler = CalendarHandler::from_config(&config, identity)?;
//!
//!     match handler.handle_get_calendar(&Caller::authenticated("/calendar")).await? {
//!         CalendarResponse::Render(view) => println!("{} events", view.events.len()),
//!         CalendarResponse::Redirect(redirect) => println!("redirect to {}", redirect.location()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`CalendarRetriever`]: calview_providers::CalendarRetriever

mod config;
mod error;
mod gate;
mod handler;
mod identity;
mod session;
mod view;

pub use config::{GraphSettings, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use gate::{CredentialGate, DEFAULT_LOGIN_PATH, Gate, Redirect, RedirectReason};
pub use handler::{CALENDAR_ROUTE, CalendarHandler};
pub use identity::{IdentityProvider, SentinelIdentity};
pub use session::Caller;
pub use view::{CALENDAR_TEMPLATE, CalendarResponse, CalendarView};
