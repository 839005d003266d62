//! File logging for simulator sessions.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber writing to `<log_dir>/<session>/totem.log`.
///
/// The returned guard flushes the writer when dropped, so keep it alive for
/// the whole run.
pub fn setup_logging(session_id: Option<&str>, log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let log_dir = log_dir.map_or_else(default_log_directory, Path::to_path_buf);

    let session_id = session_id.map_or_else(
        || {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        },
        str::to_string,
    );

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("Failed to create log directory {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "totem.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // stdout carries the JSON report, so logs only go to the file.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/totem.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory, e.g. `~/.cache/totem/logs` on Linux.
fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "totem")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/totem"))
        .join("logs")
}
