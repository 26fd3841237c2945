//! Tracing subscriber setup
//!
//! The filter comes from `RUST_LOG` and defaults to `info`. The TUI owns the
//! terminal, so interactive runs only log when a file is given.

use crate::error::AppError;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to `path` when given; otherwise install nothing
pub fn init_file(path: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Log to `path` when given, to stderr otherwise
pub fn init_stderr_or_file(path: Option<&Path>) -> Result<(), AppError> {
    if path.is_some() {
        return init_file(path);
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
