//! Env file loading
//!
//! Values already present in the process environment are never overwritten,
//! so exported variables take priority over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default env file, resolved against the current directory only.
const DEFAULT_ENV_FILE: &str = ".env";

/// Load `explicit` if given, otherwise `./.env` when one exists. Parent
/// directories are not searched. Returns the path that was loaded.
pub fn load(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::from_path(DEFAULT_ENV_FILE) {
            Ok(()) => Ok(Some(PathBuf::from(DEFAULT_ENV_FILE))),
            Err(err) if err.not_found() => Ok(None),
            Err(err) => Err(err).context("Failed to parse .env"),
        },
    }
}
