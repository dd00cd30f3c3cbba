// src/log.rs
//
// Logging facade. The `logf!`/`logd!`/`loge!` macros are what the rest of the
// crate calls; they forward to `tracing`, and `init` decides where it goes.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing;

/// Where log lines end up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain script: human eyes on the terminal.
    Stderr,
    /// Dashboard: no console, append to a file.
    File(PathBuf),
}

impl Default for LogTarget {
    fn default() -> Self {
        LogTarget::File(Path::new(STORE_DIR).join(LOG_FILE))
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(target: LogTarget) {
    let _ = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    let _ = fs::create_dir_all(parent);
                }
            }
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .try_init(),
                Err(_) => return, // unwritable path: run without a log
            }
        }
    };
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
