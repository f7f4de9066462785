use std::path::Path;

use tracing::Level;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};

/// File the binaries log to, inside the chosen log directory.
pub const LOG_FILE_NAME: &str = "mazebench.log";

/// Installs a global `fmt` subscriber that writes to `dir/mazebench.log` off the main thread.
///
/// Stdout is left to the report. The returned guard must be held until exit so buffered
/// lines get flushed.
pub fn init_logging(dir: &Path, verbose: bool) -> Result<WorkerGuard, InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(guard)
}
