//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured filter. The terminal UI owns the
//! screen, so in that mode logs only go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Logging disabled
    Off,
    /// Standard error (headless mode only)
    Stderr,
    /// Append to a file
    File(&'a Path),
}

impl<'a> LogTarget<'a> {
    /// Picks the target for a run mode
    #[must_use]
    pub const fn select(log_file: Option<&'a Path>, headless: bool) -> Self {
        match (log_file, headless) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Stderr,
            (None, false) => Self::Off,
        }
    }
}

/// Builds the filter: `RUST_LOG` if set and valid, else `default_directive`
pub fn build_filter(default_directive: &str) -> AppResult<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(default_directive).map_err(|e| {
            AppError::logging(format!("invalid log filter '{default_directive}': {e}"))
        })
    })
}

/// Installs the global subscriber
pub fn init(target: LogTarget<'_>, default_directive: &str, json: bool) -> AppResult<()> {
    let filter = build_filter(default_directive)?;

    let result = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => {
            let builder = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false);
            if json {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            let builder = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false);
            if json {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
    };

    result.map_err(|e| AppError::logging(e.to_string()))
}
