//! Application directory paths for reddy.
//!
//! Uses the [`dirs`] crate for platform-appropriate resolution.
//!
//! # Environment Overrides
//!
//! - `REDDY_CONFIG_DIR` — overrides [`config_dir`]
//! - `REDDY_LOG_DIR` — overrides [`log_dir`]

use std::path::PathBuf;

/// Directory holding `config.toml`.
///
/// Resolves to `dirs::config_dir()/reddy/` by default.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("REDDY_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("reddy"))
        .unwrap_or_else(|| PathBuf::from("/tmp/reddy-config"))
}

/// Directory for diagnostic log files.
///
/// Resolves to `dirs::data_local_dir()/reddy/logs/` by default.
#[must_use]
pub fn log_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("REDDY_LOG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_local_dir()
        .map(|d| d.join("reddy").join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/reddy-logs"))
}

/// Default config file path: [`config_dir`]`/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}
