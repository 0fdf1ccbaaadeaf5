//! Tracing subscriber setup.
//!
//! The interactive UI owns the terminal, so it logs to a file. Plain mode
//! has no screen to protect and logs to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

/// `RUST_LOG` wins over the configured level.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Log to the configured file. Returns the path in use.
pub fn init_file_logging(config: &Config) -> io::Result<PathBuf> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.logging))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();

    Ok(path)
}

pub fn init_stderr_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.logging))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .init();
}
