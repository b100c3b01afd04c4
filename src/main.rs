//! `hsh`: interactive hash-router runtime.
//!
//! # Architecture Overview
//!
//! ```text
//!   stdin ("#/user/42", "show /a", ...)        routes.toml ──▶ ConfigWatcher
//!        │                                                          │
//!        ▼                                                          ▼
//!   MemoryLocation ◀── redirects ──┐                     rebuild Router on change
//!        │                          │
//!        ▼  poll every N ms         │
//!   Router::poll() ──▶ ChainExecutor ──▶ handlers (log / redirect / external)
//!        │
//!        ▼
//!   one JSON line per dispatch on stdout
//! ```
//!
//! Input lines:
//! - `#<fragment>`: the user edits the address bar
//! - `show <path>`: dispatch a path directly
//! - `redirect <path>`: internal redirect
//! - `external <url>`: external redirect
//! - `current`: print the current path

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use hsh_router::config::{load_or_default, AppConfig, ConfigWatcher};
use hsh_router::lifecycle::build_router;
use hsh_router::observability::{logging, metrics};
use hsh_router::{DispatchContext, MemoryLocation, Router};

#[derive(Parser)]
#[command(name = "hsh")]
#[command(about = "Hash-fragment router runtime fed from stdin", long_about = None)]
struct Args {
    /// Route table (TOML). Watched for changes.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fragment the location starts with.
    #[arg(short, long, default_value = "")]
    initial: String,

    /// Router option override, `name=value` (prefix, index, mode).
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("hsh v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let overrides: Vec<(String, String)> = args
        .set
        .iter()
        .filter_map(|kv| kv.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let location = MemoryLocation::with_hash(args.initial);
    let mut router = start_router(&config, &location, &overrides)?;

    let (_watcher, mut reload_rx) = match &args.config {
        Some(path) => {
            let (watcher, rx) = ConfigWatcher::new(path);
            (Some(watcher.run()?), rx)
        }
        None => (None, mpsc::unbounded_channel::<AppConfig>().1),
    };

    let mut ticker = tokio::time::interval(Duration::from_millis(config.runtime.poll_interval_ms));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => handle_input(line.trim(), &location, &mut router)?,
                None => break,
            },
            _ = ticker.tick() => report(router.poll())?,
            Some(new_config) = reload_rx.recv() => {
                match start_router(&new_config, &location, &overrides) {
                    Ok(new_router) => router = new_router,
                    Err(e) => tracing::error!(error = %e, "Reload failed, keeping current routes"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn start_router(
    config: &AppConfig,
    location: &MemoryLocation,
    overrides: &[(String, String)],
) -> Result<Router<MemoryLocation>, Box<dyn std::error::Error>> {
    let mut router = build_router(config, location.clone())?;
    router.set_all(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    report(router.start())?;
    Ok(router)
}

fn handle_input(
    line: &str,
    location: &MemoryLocation,
    router: &mut Router<MemoryLocation>,
) -> Result<(), Box<dyn std::error::Error>> {
    if line.starts_with('#') {
        location.navigate(line);
        return Ok(());
    }

    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    let arg = arg.trim();
    match command {
        "" => {}
        "show" => report(Some(router.show(arg)))?,
        "redirect" => router.redirect_internal(arg),
        "external" => router.redirect_external(arg),
        "current" => println!("{}", serde_json::json!({ "current": router.current_path() })),
        other => tracing::warn!(command = other, "Unknown command"),
    }
    Ok(())
}

fn report(ctx: Option<DispatchContext>) -> Result<(), serde_json::Error> {
    if let Some(ctx) = ctx {
        println!("{}", serde_json::to_string(&ctx)?);
    }
    Ok(())
}
