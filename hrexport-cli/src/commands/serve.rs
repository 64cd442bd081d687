//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use hrexport_server::db::create_pool;
use hrexport_server::{run_server, AppConfig, AppState, PgSessionProvider, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides HREXPORT_BIND)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: AppConfig) -> Result<()> {
    let mut server_config = ServerConfig::from(&config);
    if let Some(bind) = args.bind {
        server_config.bind_addr = bind;
    }
    server_config.cors_permissive = args.cors_permissive;

    tracing::info!(
        database = %config.database.redacted_url(),
        max_connections = config.max_connections,
        "Starting hrexport server on {}",
        server_config.bind_addr
    );

    // Lazy pool: the first request makes the first connection
    let pool = create_pool(&config).context("Failed to create database pool")?;
    let state = AppState::new(PgSessionProvider::new(pool));

    // Run server (blocks until shutdown)
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
