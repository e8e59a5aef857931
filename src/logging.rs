//! Diagnostic logging setup.
//!
//! Logs go to stderr (stdout is reserved for command output) and, when
//! enabled, to a non-rotating file through a non-blocking writer.
//! `RUST_LOG` overrides the default filter.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;
use crate::error::{ReddyError, Result};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "reddy=info,reddy_search=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Returns the file writer's guard when file logging is enabled; keep it
/// alive until exit so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created, or a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).compact();

    let (file_layer, guard) = if config.file_enabled {
        let dir = config.resolved_directory();
        std::fs::create_dir_all(&dir)?;
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(&config.file_name)
            .build(&dir)
            .map_err(|e| ReddyError::Logging(format!("cannot open log file: {e}")))?;
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ReddyError::Logging(e.to_string()))?;

    Ok(guard)
}
