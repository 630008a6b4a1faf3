//! Logging setup.
//!
//! Logs always go to stderr so stdout stays free for the summary. When a log
//! directory is configured, two daily-rotated files are written as well:
//!
//! - `sleep-etl.<date>.log`: everything that passes the filter
//! - `error.<date>.log`: warnings and errors only
//!
//! The level defaults to `info` and can be overridden with `RUST_LOG`.

use crate::error::Result;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

const MAX_LOG_FILES: usize = 10;

fn file_appender(log_dir: &Path, prefix: &str) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(MAX_LOG_FILES)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| std::io::Error::other(e).into())
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log directory or its appenders cannot be created.
pub fn init(log_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let file_layers = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let all_logs = fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .with_ansi(false)
                .with_writer(file_appender(dir, "sleep-etl")?);
            let error_logs = fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .with_ansi(false)
                .with_writer(file_appender(dir, "error")?)
                .with_filter(EnvFilter::new("warn"));
            Some(all_logs.and_then(error_logs))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layers)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Logging initialized, log directory: {}", dir.display());
    }
    Ok(())
}
