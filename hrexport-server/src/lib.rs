//! hrexport-server: read-only HTTP export of the hr_sample employees table
//!
//! One database session is opened per request and released when the
//! handler returns. Storage failures are classified into connectivity
//! (503) and everything else (500).

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{AppConfig, ConfigError, DatabaseConfig, DatabaseTarget};
pub use db::{PgSessionProvider, Session, SessionProvider, StorageError, StorageErrorKind};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Employee, Page};
