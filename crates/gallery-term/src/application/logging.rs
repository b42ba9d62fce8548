use std::path;

use anyhow::anyhow;
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Sends JSON formatted traces to the configured log file so the terminal UI
/// stays untouched. The returned guard flushes pending lines when dropped.
pub fn init() -> Result<WorkerGuard> {
    let log_file = path::PathBuf::from(Config::get(ConfigKey::LogFile));
    let directory = log_file
        .parent()
        .map(|e| e.to_path_buf())
        .unwrap_or_else(|| path::PathBuf::from("."));
    let file_name = log_file
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", log_file.display()))?
        .to_os_string();
    std::fs::create_dir_all(&directory)?;

    let level = Config::get(ConfigKey::LogLevel)
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(non_blocking)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialize logging: {err}"))?;

    return Ok(guard);
}
