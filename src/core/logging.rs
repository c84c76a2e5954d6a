//! Logging Module
//!
//! Sets up `tracing` with two layers:
//! 1. A human-readable layer on **stderr** (stdout carries the scaffold summary).
//! 2. A JSON file layer, rolled daily, in the app data directory.
//!
//! `log` macros used throughout the crate are bridged into `tracing`.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const APP_DIR: &str = "gameshaper";
const LOG_FILE: &str = "gameshaper.log";

/// Directory the JSON log file is written to.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Default console filter: warnings only, or debug output for this crate
/// when `verbose` is set. `RUST_LOG` takes precedence over both.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "gameshaper=debug,warn"
    } else {
        "warn"
    }
}

/// Initialize the logging system.
///
/// Returns a `WorkerGuard` which must be kept alive until exit so buffered
/// file logs are flushed. `None` when the log directory cannot be created; the
/// stderr layer is installed regardless.
pub fn init(verbose: bool) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    let log_dir = log_dir();
    let file_parts = match fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
            Some(tracing_appender::non_blocking(file_appender))
        }
        Err(e) => {
            eprintln!("Failed to create logs directory {}: {}", log_dir.display(), e);
            None
        }
    };

    let (file_layer, guard) = match file_parts {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .json()
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_filter(EnvFilter::new("gameshaper=debug,info"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // `init` also installs the log -> tracing bridge; a second subscriber
    // (e.g. in tests) is reported rather than panicking.
    if let Err(e) = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", e);
        return None;
    }

    if log::max_level() == log::LevelFilter::Off {
        if let Err(e) = tracing_log::LogTracer::init() {
            eprintln!("Failed to initialize LogTracer: {}", e);
        }
    }

    log::debug!("logging initialized, file log in {}", log_dir.display());
    guard
}
