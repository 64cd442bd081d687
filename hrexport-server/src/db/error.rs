//! Storage error classification
//!
//! Driver errors are folded into two kinds at the storage boundary so the
//! HTTP layer dispatches on a tag instead of inspecting driver internals.

/// Coarse storage failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    /// Database unreachable, connection refused or dropped
    Connectivity,
    /// Any other storage failure
    Query,
}

/// Storage-layer error
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database connectivity error: {0}")]
    Connectivity(String),

    #[error("database query error: {0}")]
    Query(String),
}

impl StorageError {
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            Self::Connectivity(_) => StorageErrorKind::Connectivity,
            Self::Query(_) => StorageErrorKind::Query,
        }
    }

    pub fn is_connectivity(&self) -> bool {
        self.kind() == StorageErrorKind::Connectivity
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StorageErrorKind::Connectivity,
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => sqlstate_kind(code.as_ref()),
                None => StorageErrorKind::Query,
            },
            _ => StorageErrorKind::Query,
        };

        match kind {
            StorageErrorKind::Connectivity => Self::Connectivity(err.to_string()),
            StorageErrorKind::Query => Self::Query(err.to_string()),
        }
    }
}

/// Classify a Postgres SQLSTATE code.
///
/// Classes 08 (connection exception), 53 (insufficient resources),
/// 57 (operator intervention) and 58 (system error) mean the server cannot
/// serve us right now. Everything else is a problem with the statement or data.
/// That includes rejected credentials (class 28) and an unknown database
/// (3D000): both are configuration mistakes that retrying will not fix.
pub fn sqlstate_kind(code: &str) -> StorageErrorKind {
    match code.get(..2) {
        Some("08" | "53" | "57" | "58") => StorageErrorKind::Connectivity,
        _ => StorageErrorKind::Query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_are_connectivity() {
        let err = StorageError::from(sqlx::Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )));
        assert_eq!(err.kind(), StorageErrorKind::Connectivity);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn pool_errors_are_connectivity() {
        assert!(StorageError::from(sqlx::Error::PoolTimedOut).is_connectivity());
        assert!(StorageError::from(sqlx::Error::PoolClosed).is_connectivity());
        assert!(StorageError::from(sqlx::Error::WorkerCrashed).is_connectivity());
    }

    #[test]
    fn decode_errors_are_query() {
        let err = StorageError::from(sqlx::Error::ColumnNotFound("salary".into()));
        assert_eq!(err.kind(), StorageErrorKind::Query);

        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), StorageErrorKind::Query);

        let err = StorageError::from(sqlx::Error::Protocol("unexpected message".into()));
        assert_eq!(err.kind(), StorageErrorKind::Query);
    }

    #[test]
    fn sqlstate_classes() {
        // connection_failure, admin_shutdown, cannot_connect_now, too_many_connections
        for code in ["08006", "08001", "57P01", "57P03", "53300", "58030"] {
            assert_eq!(sqlstate_kind(code), StorageErrorKind::Connectivity, "{code}");
        }
        // syntax_error, undefined_table, unique_violation, lock_not_available
        for code in ["42601", "42P01", "23505", "55P03"] {
            assert_eq!(sqlstate_kind(code), StorageErrorKind::Query, "{code}");
        }
        assert_eq!(sqlstate_kind(""), StorageErrorKind::Query);
    }

    #[test]
    fn misconfiguration_is_not_connectivity() {
        // invalid_password, invalid_authorization_specification, invalid_catalog_name
        for code in ["28P01", "28000", "3D000"] {
            assert_eq!(sqlstate_kind(code), StorageErrorKind::Query, "{code}");
        }
    }
}
