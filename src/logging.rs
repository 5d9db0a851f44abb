//! Tracing/logging initialization.
//!
//! The interactive screen owns the terminal, so log lines go to
//! `<data dir>/logs/spokes.log` instead of stderr. The filter comes from
//! `RUST_LOG`, falling back to the configured level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initialize logging into `logs_dir`. Returns the log file path on success.
///
/// Logging is best-effort: if the directory or file cannot be opened the
/// program runs without it. Safe to call multiple times (subsequent calls are
/// no-ops).
pub fn init(logs_dir: &Path, default_level: &str) -> Option<PathBuf> {
    fs::create_dir_all(logs_dir).ok()?;
    let log_path = logs_dir.join(crate::constants::LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(log_path)
}
