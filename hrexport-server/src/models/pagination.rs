//! Offset/limit pagination for the export endpoints

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Maximum rows returned by a single request
pub const MAX_LIMIT: u32 = 100;

/// Rows returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: u32 = MAX_LIMIT;

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Rows to skip (>= 0, unbounded)
    pub offset: u64,
    /// Rows to return (0..=100)
    pub limit: u32,
}

impl Page {
    /// Build a page, rejecting a limit above [`MAX_LIMIT`].
    pub fn new(offset: u64, limit: u32) -> Result<Self, ValidationError> {
        if limit > MAX_LIMIT {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 0,
                max: Some(MAX_LIMIT as i64),
                value: limit.to_string(),
            });
        }
        Ok(Self { offset, limit })
    }

    /// SQL OFFSET value.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }

    /// SQL LIMIT value.
    pub fn sql_limit(&self) -> i64 {
        self.limit as i64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Raw query parameters, kept as text so type errors are reported by us
/// rather than by the query-string deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl TryFrom<PageParams> for Page {
    type Error = ValidationError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        let offset = match params.offset.as_deref() {
            None => 0,
            Some(raw) => {
                let value = parse_bounded("offset", raw, None)?;
                u64::try_from(value).map_err(|_| out_of_range("offset", None, raw))?
            }
        };

        let limit = match params.limit.as_deref() {
            None => DEFAULT_LIMIT,
            Some(raw) => {
                let max = Some(MAX_LIMIT as i64);
                let value = parse_bounded("limit", raw, max)?;
                u32::try_from(value).map_err(|_| out_of_range("limit", max, raw))?
            }
        };

        Page::new(offset, limit)
    }
}

/// Parse `raw` as an integer in `0..=max`. Integers too large for `i64` are
/// out of range, not malformed.
fn parse_bounded(field: &'static str, raw: &str, max: Option<i64>) -> Result<i64, ValidationError> {
    let value = raw.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(field, max, raw),
        _ => ValidationError::NotAnInteger {
            field,
            value: raw.to_owned(),
        },
    })?;

    if value < 0 || max.is_some_and(|max| value > max) {
        return Err(out_of_range(field, max, raw));
    }
    Ok(value)
}

fn out_of_range(field: &'static str, max: Option<i64>, raw: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field,
        min: 0,
        max,
        value: raw.to_owned(),
    }
}
