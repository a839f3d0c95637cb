// src/log.rs
//
// Logging goes through `tracing`; the macros below keep call sites short.
// `init` installs a fmt subscriber once per process, either on stderr or
// appending to a log file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::Error;

/// Install the global subscriber. A second call is a no-op.
pub fn init(level: Level, file: Option<&Path>) -> Result<(), Error> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let res = match file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let f = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(f)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    // Already installed (tests, GUI reload): keep the first one.
    if res.is_err() {
        tracing::debug!("log subscriber already installed");
    }
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
