//! Locations of enroll's data, log, and config files

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default ~/.enroll location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        tracing::debug!(path = %path.display(), "Data directory already initialized");
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".enroll"))
        .unwrap_or_else(|| PathBuf::from(".enroll"))
}

/// Base data directory: the custom path if set via init_data_dir(), otherwise ~/.enroll
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the logs directory (~/.enroll/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the default log file path (~/.enroll/logs/enroll.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("enroll.log")
}

/// Get the config file path (~/.enroll/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
