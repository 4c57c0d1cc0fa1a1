//! `calview events`: run one calendar request and print the outcome.

use std::path::Path;
use std::sync::Arc;

use calview_core::{OutputFormat, format_events};
use calview_server::{CalendarHandler, CalendarResponse, Caller, ServerConfig};
use tracing::debug;

use crate::cli::EventsArgs;
use crate::error::ClientResult;
use crate::secret::SecretIdentity;

/// Loads the configuration and runs the request.
pub async fn run(config_path: Option<&Path>, args: &EventsArgs) -> ClientResult<()> {
    let config = super::load_config(config_path)?;
    let output = render(&config, args).await?;
    println!("{}", output);
    Ok(())
}

/// Runs the request described by `args` and renders the response.
///
/// A redirect is printed as `redirect: <location>`.
pub async fn render(config: &ServerConfig, args: &EventsArgs) -> ClientResult<String> {
    let identity = Arc::new(SecretIdentity::new(args.token.clone()));
    let handler = CalendarHandler::from_config(config, identity)?;

    let caller = if args.anonymous {
        Caller::anonymous(&args.path)
    } else {
        Caller::authenticated(&args.path)
    };
    debug!(authenticated = caller.is_authenticated(), path = %args.path, "built caller");

    let response = handler.handle_get_calendar(&caller).await?;
    Ok(render_response(&response, args.output_format()))
}

fn render_response(response: &CalendarResponse, format: OutputFormat) -> String {
    match response {
        CalendarResponse::Render(view) => format_events(&view.events, format),
        CalendarResponse::Redirect(redirect) => format!("redirect: {}", redirect.location()),
    }
}
