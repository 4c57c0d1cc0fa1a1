//! calview CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use calview_client::cli::{Cli, Command, ConfigAction};
use calview_client::commands;
use calview_client::error::ClientResult;
use calview_core::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(TracingConfig::cli(cli.debug)) {
        eprintln!("warning: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Events(args) => commands::events::run(config_path, &args).await,
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(config_path),
            ConfigAction::Validate => commands::config::validate(config_path),
            ConfigAction::Path => commands::config::path(config_path),
        },
    }
}
