//! Command implementations.

pub mod config;
pub mod events;

use std::path::Path;

use calview_server::ServerConfig;

use crate::error::ClientResult;

/// Loads the configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> ClientResult<ServerConfig> {
    let config = match path {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };
    Ok(config)
}
