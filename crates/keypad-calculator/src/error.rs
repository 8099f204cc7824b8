//! Error types for the application surface (CLI, config, logging)

use thiserror::Error;

use crate::core::CalcError;

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can occur outside the arithmetic core
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Malformed configuration file
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Logging error: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// Calculator error (e.g. an unknown key in a script)
    #[error("{0}")]
    Calc(#[from] CalcError),
}

impl AppError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
