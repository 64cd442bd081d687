//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value could not be parsed as an integer
    NotAnInteger { field: &'static str, value: String },

    /// Integer falls outside the accepted range. `value` is the input as
    /// given, since it may not fit any integer type.
    OutOfRange {
        field: &'static str,
        min: i64,
        max: Option<i64>,
        value: String,
    },

    /// Query string could not be decoded at all (e.g. a repeated key)
    MalformedQuery { reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotAnInteger { field, .. } | Self::OutOfRange { field, .. } => *field,
            Self::MalformedQuery { .. } => "query",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger { field, value } => {
                write!(f, "{}: '{}' is not a valid integer", field, value)
            }
            Self::OutOfRange {
                field,
                min,
                max: Some(max),
                value,
            } => write!(f, "{} must be between {} and {}, got {}", field, min, max, value),
            Self::OutOfRange {
                field,
                min,
                max: None,
                value,
            } => write!(f, "{} must be greater than or equal to {}, got {}", field, min, value),
            Self::MalformedQuery { reason } => write!(f, "malformed query string: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
