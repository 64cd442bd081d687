//! Wire and storage models
//!
//! Request input is validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod employee;
pub mod pagination;
pub mod validation;

pub use employee::Employee;
pub use pagination::{Page, PageParams, DEFAULT_LIMIT, MAX_LIMIT};
pub use validation::ValidationError;
