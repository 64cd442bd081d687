//! Database connectivity check

use anyhow::{anyhow, Context, Result};

use hrexport_server::db::create_pool;
use hrexport_server::{AppConfig, PgSessionProvider, SessionProvider, StorageError, StorageErrorKind};

/// Open one session and ping the database.
pub async fn run_check(config: AppConfig) -> Result<()> {
    let target = config.database.redacted_url();
    let pool = create_pool(&config).context("Failed to create database pool")?;
    let provider = PgSessionProvider::new(pool);

    match ping(&provider).await {
        Ok(()) => {
            println!("ok: {}", target);
            Ok(())
        }
        Err(err) => {
            let kind = match err.kind() {
                StorageErrorKind::Connectivity => "connectivity",
                StorageErrorKind::Query => "query",
            };
            Err(anyhow!("{} failure against {}: {}", kind, target, err))
        }
    }
}

async fn ping(provider: &PgSessionProvider) -> Result<(), StorageError> {
    let mut session = provider.open().await?;
    session.ping().await
}
