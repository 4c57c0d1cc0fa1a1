//! Configuration commands.

use std::path::Path;

use calview_server::ServerConfig;

use crate::error::ClientResult;

/// Prints the effective configuration as TOML.
pub fn dump(path: Option<&Path>) -> ClientResult<()> {
    let config = super::load_config(path)?;
    println!("# config.toml ({})", display_path(path));
    println!("{}", config.to_toml()?);
    Ok(())
}

/// Loads and validates the configuration.
pub fn validate(path: Option<&Path>) -> ClientResult<()> {
    let config = super::load_config(path)?;
    config.validate()?;
    println!("Configuration is valid.");
    Ok(())
}

/// Shows the configuration file path.
pub fn path(path: Option<&Path>) -> ClientResult<()> {
    println!("config: {}", display_path(path));
    Ok(())
}

fn display_path(path: Option<&Path>) -> String {
    path.map(Path::to_path_buf)
        .unwrap_or_else(ServerConfig::default_path)
        .display()
        .to_string()
}
