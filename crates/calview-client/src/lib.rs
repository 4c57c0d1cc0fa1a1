//! Command-line host for the calendar handler.
//!
//! Plays the part of the web host: it builds a [`calview_server::Caller`],
//! supplies the token through [`secret::SecretIdentity`] and prints the
//! resulting view or redirect.

pub mod cli;
pub mod commands;
pub mod error;
pub mod secret;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
