//! Command-line entry point for the glossary manager
//!
//! Reads settings from the platform config directory (see `AppConfig`),
//! opens the JSON storage file and runs one command.

mod cli;
mod commands;

#[cfg(test)]
mod test_mocks;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use glossary_app::{AppConfig, AppState};
use glossary_core::CoreError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so command output on stdout stays scriptable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    tracing::debug!("Using storage file {}", config.store_file().display());

    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to open storage: {e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match commands::run(&state, cli.command, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CoreError>() {
                Some(core) if core.is_expected() => tracing::warn!("{core}"),
                Some(core) => tracing::error!("{core}"),
                None => tracing::error!("{e:#}"),
            }
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
