//! Application configuration
//!
//! Built once at startup from environment variables (the CLI loads the env
//! file into the process environment first) and passed down by value.
//!
//! Keys:
//!   DATABASE_URL               full connection string, wins over DB_*
//!   DB_HOST                    default: localhost
//!   DB_PORT                    default: 5432
//!   DB_USER                    required without DATABASE_URL
//!   DB_PASSWORD                default: empty
//!   DB_NAME                    required without DATABASE_URL
//!   DEBUG                      true/false, default: false
//!   HREXPORT_BIND              default: 127.0.0.1:8000
//!   DB_MAX_CONNECTIONS         default: 5
//!   DB_ACQUIRE_TIMEOUT_SECS    default: 30

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::db::pool::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Default Postgres port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {key}")]
    Missing { key: &'static str },

    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Database connection settings assembled from individual keys
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Postgres connection string. User, password and database name are
    /// percent-encoded.
    pub fn connection_url(&self) -> String {
        let user = urlencoding::encode(&self.user);
        let name = urlencoding::encode(&self.name);
        if self.password.is_empty() {
            format!("postgres://{}@{}:{}/{}", user, self.host, self.port, name)
        } else {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                user,
                urlencoding::encode(&self.password),
                self.host,
                self.port,
                name
            )
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"****")
            .field("name", &self.name)
            .finish()
    }
}

/// Where the database lives
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// Full connection string from `DATABASE_URL`
    Url(String),
    /// Assembled from `DB_*` keys
    Parts(DatabaseConfig),
}

impl DatabaseTarget {
    /// The opaque connection string handed to the pool.
    pub fn connection_url(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Parts(parts) => parts.connection_url(),
        }
    }

    /// Connection string with the password masked, for logs and display.
    pub fn redacted_url(&self) -> String {
        redact_url(&self.connection_url())
    }
}

impl fmt::Debug for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(_) => f.debug_tuple("Url").field(&self.redacted_url()).finish(),
            Self::Parts(parts) => f.debug_tuple("Parts").field(parts).finish(),
        }
    }
}

/// Immutable application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseTarget,
    pub bind_addr: SocketAddr,
    pub debug: bool,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a key
    /// or `None` when unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Parts(DatabaseConfig {
                host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("DB_PORT", get("DB_PORT"), DEFAULT_DB_PORT)?,
                user: get("DB_USER").ok_or(ConfigError::Missing { key: "DB_USER" })?,
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                name: get("DB_NAME").ok_or(ConfigError::Missing { key: "DB_NAME" })?,
            }),
        };

        let debug = match get("DEBUG") {
            Some(raw) => parse_bool("DEBUG", &raw)?,
            None => false,
        };

        let bind_addr = parse_or(
            "HREXPORT_BIND",
            get("HREXPORT_BIND"),
            SocketAddr::from(([127, 0, 0, 1], 8000)),
        )?;

        let max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            get("DB_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        let acquire_timeout = parse_or(
            "DB_ACQUIRE_TIMEOUT_SECS",
            get("DB_ACQUIRE_TIMEOUT_SECS"),
            DEFAULT_ACQUIRE_TIMEOUT.as_secs(),
        )
        .map(Duration::from_secs)?;

        Ok(Self {
            database,
            bind_addr,
            debug,
            max_connections,
            acquire_timeout,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected true or false".into(),
        }),
    }
}

/// Mask the password component of a connection URL.
fn redact_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let rest = &url[scheme_end + 3..];
    let Some(at) = rest.rfind('@') else {
        return url.to_string();
    };
    let credentials = &rest[..at];
    match credentials.find(':') {
        Some(colon) => format!(
            "{}{}:****{}",
            &url[..scheme_end + 3],
            &credentials[..colon],
            &rest[at..]
        ),
        None => url.to_string(),
    }
}
