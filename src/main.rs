//! Folio Server
//!
//! Run with: cargo run --bin folio
//!
//! # Configuration
//!
//! Settings come from the first config file found (`--config`, then
//! `~/.config/folio/config.toml`, `/etc/folio/config.toml`,
//! `./config.toml`), then environment variables, then command-line flags.
//!
//! Environment variables:
//! - `FOLIO_HOST`: Host to bind to (default: 0.0.0.0)
//! - `FOLIO_PORT`: Port to listen on (default: 8080)
//! - `FOLIO_STATIC_DIR`: Front-end build directory (default: ./folio-ui/dist)
//! - `FOLIO_LOG_LEVEL`, `FOLIO_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use folio::api::{serve, AppState};
use folio::catalog::Catalog;
use folio::config::Config;
use folio::router::RouteTable;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the portfolio site and its JSON API")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the built front-end
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Nothing is logged until the subscriber is up, so config problems are
    // returned as errors rather than logged as warnings.
    let source = args.config.clone().or_else(Config::default_path);
    let mut config = match &source {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::from_env().context("reading environment overrides")?,
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = args.static_dir {
        config.server.static_dir = dir;
    }

    config.logging.init();

    tracing::info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));
    match &source {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::info!("Using default config with environment overrides"),
    }

    let catalog = Catalog::global();
    if let Err(errors) = catalog.validate() {
        for error in &errors {
            tracing::error!("Catalog invariant violated: {}", error);
        }
        anyhow::bail!("catalog has {} invalid entries", errors.len());
    }

    let routes = RouteTable::global();
    tracing::info!(
        projects = catalog.len(),
        routes = routes.len(),
        static_dir = %config.server.static_dir.display(),
        "Site loaded"
    );

    let state = AppState::new(config.server.clone());
    serve(state, &config.server).await?;

    Ok(())
}
