//! hrexport CLI - read-only HTTP export of the hr_sample employees table
//!
//! Configuration comes from the environment, optionally seeded from an env
//! file (`--env-file`, or `./.env` when present).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hrexport_server::AppConfig;

mod commands;
mod env_file;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "hrexport",
    author,
    version,
    about = "Read-only HTTP export of the hr_sample employees table"
)]
struct Cli {
    /// Env file to load before reading configuration (default: ./.env if present)
    #[arg(long, global = true, env = "HREXPORT_ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Enable debug logging, including SQL statements
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve(commands::ServeArgs),
    /// Open one database session and ping the database
    Check,
    /// Print the resolved configuration (password masked)
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = env_file::load(cli.env_file.as_deref())?;
    let config = AppConfig::from_env().context("Invalid configuration")?;

    tracing_setup::init(&TracingConfig {
        debug: cli.debug || config.debug,
    })
    .ok();

    match &loaded {
        Some(path) => tracing::debug!("Loaded env file {}", path.display()),
        None => tracing::debug!("No env file found, using process environment only"),
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await?,
        Commands::Check => commands::run_check(config).await?,
        Commands::Config => commands::run_config(&config)?,
    }
    Ok(())
}
