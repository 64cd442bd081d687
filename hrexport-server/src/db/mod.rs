//! Database layer - connection pool, sessions and repositories
//!
//! - One session per request, released when dropped
//! - Driver errors classified into [`StorageErrorKind`] at this boundary
//! - Read-only: nothing here writes to the database

pub mod error;
pub mod pool;
pub mod repos;
pub mod session;

pub use error::{StorageError, StorageErrorKind};
pub use pool::{create_pool, create_pool_with_options};
pub use session::{PgSession, PgSessionProvider, Session, SessionProvider};
