//! aviary - bird record HTTP server
//!
//! Serves create/list endpoints over a `birds` table plus a static asset
//! directory and a greeting endpoint.
//!
//! Usage:
//!   aviary                           # listen on 127.0.0.1:8080
//!   aviary --port 3000 --debug       # debug logging to console
//!   RUST_LOG=aviary_server=debug aviary  # fine-grained log control

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aviary_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "aviary",
    version,
    about = "HTTP server exposing create/list operations over bird records"
)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Postgres connection string (default: $DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Static asset directory served under /assets
    #[arg(long, default_value = "./assets")]
    assets: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Initialize tracing with console output.
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        // Debug mode: set debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let defaults = ServerConfig::default();
    let config = ServerConfig {
        host: cli.bind,
        port: cli.port,
        database_url: cli.database_url.unwrap_or(defaults.database_url),
        assets_dir: cli.assets,
    };

    run_server(config).await?;
    Ok(())
}
