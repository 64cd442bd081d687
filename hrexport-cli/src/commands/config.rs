//! Print the resolved configuration

use anyhow::Result;

use hrexport_server::AppConfig;

/// Print the effective configuration, password masked.
pub fn run_config(config: &AppConfig) -> Result<()> {
    println!("database: {}", config.database.redacted_url());
    println!("bind: {}", config.bind_addr);
    println!("debug: {}", config.debug);
    println!("max_connections: {}", config.max_connections);
    println!("acquire_timeout_secs: {}", config.acquire_timeout.as_secs());
    Ok(())
}
