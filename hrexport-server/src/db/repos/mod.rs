//! Repository implementations for database access
//!
//! Repositories borrow a connection from the request's session; they never
//! reach for the pool themselves.

pub mod employees;

pub use employees::{EmployeeRepo, EMPLOYEES_QUERY};
