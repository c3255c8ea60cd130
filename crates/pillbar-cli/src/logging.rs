//! Tracing setup for the two CLI surfaces.
//!
//! Non-interactive commands log to stderr. The demo logs to a rolling file
//! instead, since stderr would paint over the alternate screen.

use anyhow::{Context, Result};
use pillbar_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes stderr logging for non-interactive commands.
pub fn init_stderr(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        // Fallback to the `default_level` log filter if the environment
        // variable is not set _or_ contains an invalid value
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initializes daily-rolling file logging for the demo.
///
/// The returned guard flushes buffered log lines on drop; keep it alive for
/// the life of the process.
pub fn init_file(default_level: &str) -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create logs dir {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "pillbar.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}
