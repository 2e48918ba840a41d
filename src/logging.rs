//! Tracing setup.
//!
//! Logs go to stderr for one-shot commands. The interactive view owns the
//! terminal, so there they go to `--log-file`, or to [`default_log_path`]
//! when none is given.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILE: &str = "trendcast.log";

/// Map `-v` occurrences to a level (0=warn, 1=info, 2=debug, 3+=trace).
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Log file used by the interactive view when `--log-file` is not given.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE)
}

/// Where logs are written; `None` means stderr.
pub fn log_destination(log_file: Option<&Path>, interactive: bool) -> Option<PathBuf> {
    match log_file {
        Some(path) => Some(path.to_path_buf()),
        None if interactive => Some(default_log_path()),
        None => None,
    }
}

/// Initialize the global subscriber. `RUST_LOG` overrides the verbosity.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let level = level_for(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trendcast={level}")));

    match log_destination(log_file, interactive) {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .try_init()?;
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .try_init()?;
        }
    }

    Ok(())
}
