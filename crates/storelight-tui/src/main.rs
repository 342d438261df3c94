//! `storelight` — terminal status indicator for a storefront's hosted
//! catalog backend.
//!
//! On startup a one-shot probe classifies the backend as connected,
//! erroring, or absent (demo mode) and the result is rendered as a colored
//! badge. Logs are written to a file (default `/tmp/storelight.log`) to
//! avoid corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app
//! launch.

mod action;
mod app;
mod badge;
mod event;
mod probe_bridge;
mod theme;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use storelight_api::CatalogClient;
use storelight_config::Config;
use storelight_core::{CatalogService, LiveBackend};

use crate::app::App;

/// Terminal status indicator for the storelight catalog backend.
#[derive(Parser, Debug)]
#[command(name = "storelight", version, about)]
struct Cli {
    /// Catalog backend URL (e.g., https://catalog.example.com)
    #[arg(short = 'u', long, env = "STORELIGHT_URL")]
    url: Option<String>,

    /// API key for the catalog backend
    #[arg(short = 'k', long, env = "STORELIGHT_API_KEY")]
    api_key: Option<String>,

    /// Config file path (defaults to the platform config dir)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log file path (defaults to /tmp/storelight.log)
    #[arg(long, default_value = "/tmp/storelight.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("storelight={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("storelight.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Load config and apply CLI flag overrides (flag > env > file).
fn effective_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => storelight_config::load_config_from(path).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "failed to load config file");
            Config::default()
        }),
        None => storelight_config::load_config_or_default(),
    };

    if cli.url.is_some() || cli.api_key.is_some() {
        let mut profile = config.backend.take().unwrap_or_default();
        if let Some(url) = &cli.url {
            profile.url = url.clone();
        }
        if let Some(key) = &cli.api_key {
            profile.api_key = Some(key.clone());
        }
        config.backend = Some(profile);
    }

    config
}

/// Build the probe inputs from configuration.
///
/// Three shapes fall out: credentials present and a client built
/// (available), credentials present but unusable (configured only), or
/// nothing at all (demo mode).
fn build_probe_parts(config: &Config) -> (LiveBackend, CatalogService) {
    if !config.is_configured() {
        info!("backend not configured; demo mode");
        return (LiveBackend::new(false, false), CatalogService::demo_only());
    }

    let Some(profile) = config.backend.as_ref() else {
        return (LiveBackend::new(false, false), CatalogService::demo_only());
    };

    match profile.resolve() {
        Ok(resolved) => {
            match CatalogClient::new(resolved.url, resolved.api_key, resolved.timeout) {
                Ok(client) => (LiveBackend::new(true, true), CatalogService::live(client)),
                Err(e) => {
                    warn!(error = %e, "failed to build catalog client");
                    (LiveBackend::new(true, false), CatalogService::demo_only())
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "backend profile invalid");
            (LiveBackend::new(true, false), CatalogService::demo_only())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    info!(
        url = cli.url.as_deref().unwrap_or("(not set)"),
        "starting storelight"
    );

    let config = effective_config(&cli);
    let (backend, catalog) = build_probe_parts(&config);

    let mut app = App::new(backend, catalog);
    app.run().await?;

    Ok(())
}
