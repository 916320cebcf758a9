//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a file in the
//! cache directory. Headless runs log to stderr.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Where log output goes.
pub enum LogTarget {
    Stderr,
    File,
}

/// Default log file location.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("zcalc").join("zcalc.log"))
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init(config: &LogConfig, target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => match open_log_file() {
            Some(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            // No writable cache dir; run without logs rather than
            // scribbling over the UI.
            None => return,
        },
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn open_log_file() -> Option<File> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
