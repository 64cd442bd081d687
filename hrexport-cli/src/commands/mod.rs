//! Command implementations for the hrexport CLI

pub mod check;
pub mod config;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use check::run_check;
pub use config::run_config;
pub use serve::{run_serve, ServeArgs};
