//! File-based tracing setup
//!
//! The TUI owns stdout, so logs always go to a file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

/// Install the global subscriber writing to `log_path`
///
/// `RUST_LOG` takes precedence over `level`. The returned guard must be held
/// until shutdown so buffered lines are flushed.
pub fn init_logging(level: &str, log_path: &Path) -> Result<WorkerGuard> {
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .ok_or_else(|| AppError::config(format!("Invalid log file path: {}", log_path.display())))?;

    std::fs::create_dir_all(log_dir)
        .map_err(|e| AppError::io(format!("Failed to create {}", log_dir.display()), e))?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter(level))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

