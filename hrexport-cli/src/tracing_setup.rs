//! Tracing setup for the hrexport binary
//!
//! Usage:
//!   hrexport --debug serve             # Debug logging, including SQL statements
//!   DEBUG=true hrexport serve          # Same, from the env file
//!   RUST_LOG=hrexport_server=trace     # Fine-grained log control (wins over both)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used in debug mode. sqlx logs every statement at debug level.
const DEBUG_FILTER: &str = "hrexport_cli=debug,hrexport_server=debug,sqlx=debug,tower_http=debug,info";

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (ignored when RUST_LOG is set)
    pub debug: bool,
}

/// Directives used when RUST_LOG is not set.
fn default_directives(config: &TracingConfig) -> &'static str {
    if config.debug {
        DEBUG_FILTER
    } else {
        "info"
    }
}

/// Build the filter: RUST_LOG if set, otherwise debug or info.
pub fn filter(config: &TracingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)))
}

/// Initialize tracing with console output
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
