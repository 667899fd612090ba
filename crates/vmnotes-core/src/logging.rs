//! File logging
//!
//! The TUI owns stdout, so every log line goes to a daily file under
//! `{data_local_dir}/vmnotes/logs/` (or `VMNOTES_LOG_DIR` when set). Only the
//! last [`KEEP_LOG_FILES`] days are kept.
//!
//! ```bash
//! VMNOTES_LOG=debug vmnotes
//! VMNOTES_LOG=vmnotes_app=trace vmnotes --screen select
//! ```

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding the filter directives
pub const FILTER_ENV: &str = "VMNOTES_LOG";

/// Environment variable overriding the log directory
pub const DIR_ENV: &str = "VMNOTES_LOG_DIR";

const DEFAULT_FILTER: &str = "vmnotes=info,vmnotes_core=info,vmnotes_app=info,vmnotes_tui=info,warn";

pub const KEEP_LOG_FILES: usize = 7;

/// Install the global subscriber writing to the rolling log file
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let appender = file_appender(&log_dir)?;
    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::config(format!("Logging already initialised: {e}")))?;

    tracing::info!("vmnotes {} logging to {}", env!("CARGO_PKG_VERSION"), log_dir.display());
    Ok(())
}

/// `VMNOTES_LOG_DIR`, else `{data_local_dir}/vmnotes/logs`
pub fn log_directory() -> PathBuf {
    match std::env::var_os(DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vmnotes")
            .join("logs"),
    }
}

fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("vmnotes")
        .filename_suffix("log")
        .max_log_files(KEEP_LOG_FILES)
        .build(dir)
        .map_err(|e| Error::config(format!("Cannot open log file in {}: {}", dir.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directory() {
        if std::env::var_os(DIR_ENV).is_none() {
            assert!(log_directory().ends_with("vmnotes/logs"));
        }
    }

    #[test]
    fn test_appender_creates_files_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let appender = file_appender(dir.path());
        assert!(appender.is_ok());
    }
}
