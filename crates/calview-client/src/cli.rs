//! Command-line interface definition.

use std::path::PathBuf;

use calview_core::OutputFormat;
use calview_server::CALENDAR_ROUTE;
use clap::{Args, Parser, Subcommand};

/// calview - your calendar events from the command line
#[derive(Debug, Parser)]
#[command(name = "calview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CALVIEW_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List calendar events
    Events(EventsArgs),

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `calview events`.
#[derive(Debug, Clone, Args)]
pub struct EventsArgs {
    /// Access token, or a `pass::`/`env::` reference to it
    #[arg(long, env = "CALVIEW_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Act as a caller without a session
    #[arg(long)]
    pub anonymous: bool,

    /// Requested path, used as the post-login return destination
    #[arg(long, default_value = CALENDAR_ROUTE)]
    pub path: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl EventsArgs {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_events_defaults() {
        let cli = Cli::try_parse_from(["calview", "events"]).unwrap();
        let Command::Events(args) = cli.command else {
            panic!("expected events command");
        };
        assert_eq!(args.path, "/calendar");
        assert!(!args.anonymous);
        assert_eq!(args.output_format(), OutputFormat::Text);
    }

    #[test]
    fn parse_events_flags() {
        let cli = Cli::try_parse_from([
            "calview", "events", "--json", "--anonymous", "--path", "/cal", "--token", "env::T",
        ])
        .unwrap();
        let Command::Events(args) = cli.command else {
            panic!("expected events command");
        };
        assert!(args.anonymous);
        assert_eq!(args.path, "/cal");
        assert_eq!(args.token.as_deref(), Some("env::T"));
        assert_eq!(args.output_format(), OutputFormat::Json);
    }

    #[test]
    fn parse_config_with_global_flags() {
        let cli = Cli::try_parse_from(["calview", "config", "validate", "-c", "/tmp/c.toml", "-v"])
            .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Validate
            }
        ));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
