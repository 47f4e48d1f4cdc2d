//! # OrthoChat Main Entry Point
//!
//! Books a demo from the command line, either from flags or by prompting.

use anyhow::Result;
use orthochat::cmd_args::CommandLineArgs;
use orthochat::config;
use orthochat::form::events::{ScriptedEventSource, TerminalEventSource};
use orthochat::form::views::TerminalRenderer;
use orthochat::{AppController, FormController, SubmissionClient};
use std::process::ExitCode;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_env(config::LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    // stderr keeps stdout for prompts and notifications
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let cmd_args = CommandLineArgs::parse();
    let profile_path = config::get_profile_path();
    let profile = config::load_profile(cmd_args.profile(), &profile_path)?;
    let endpoint =
        config::resolve_endpoint(cmd_args.endpoint(), config::endpoint_from_env(), &profile);
    tracing::info!("Delivering demo bookings to {}", endpoint);

    let form = FormController::new(SubmissionClient::new(endpoint)?);
    let view = TerminalRenderer::stdout();

    let notification = if cmd_args.is_scripted() {
        let source = ScriptedEventSource::with_events(cmd_args.scripted_events());
        AppController::new(form, source, view).run().await?
    } else {
        println!("🦷 Book an OrthoChat demo");
        println!("We'll contact you within 24 hours.\n");
        AppController::new(form, TerminalEventSource::stdio(), view)
            .run()
            .await?
    };

    Ok(match notification {
        Some(notification) if !notification.is_failure() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
