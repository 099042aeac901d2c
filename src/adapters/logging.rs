//! Process-wide logging: console mirror plus an append-only log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

/// Log file written by the worker (`--once` and scheduler loop).
pub const WORKER_LOG_FILE: &str = "auto_generator.log";

/// Log file written by the supervisor.
pub const SUPERVISOR_LOG_FILE: &str = "background_service.log";

fn file_appender(log_path: &Path) -> Result<RollingFileAppender, AppError> {
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::Logging(format!("invalid log path {}", log_path.display())))?;
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| AppError::Logging(format!("cannot open {}: {e}", log_path.display())))
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered file output is flushed.
pub fn init_logging(log_path: &Path) -> Result<WorkerGuard, AppError> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(log_path)?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(fmt::layer().with_target(false).with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(guard)
}
