//! Calculator configuration
//!
//! Loaded from an optional YAML file; missing keys take their defaults.
//!
//! ```yaml
//! error_marker: Erro
//! max_fraction_digits: 10
//! log_filter: info
//! log_json: false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::format::NumberFormat;
use crate::error::{AppError, AppResult};

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Text shown when evaluation fails
    pub error_marker: String,
    /// Fraction digits kept when formatting non-integral results
    pub max_fraction_digits: usize,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Emit log lines as JSON objects
    pub log_json: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            error_marker: Self::DEFAULT_ERROR_MARKER.to_string(),
            max_fraction_digits: NumberFormat::DEFAULT_FRACTION_DIGITS,
            log_filter: "info".to_string(),
            log_json: false,
        }
    }
}

impl CalcConfig {
    /// Error marker shown when evaluation fails ("Error" in Portuguese)
    pub const DEFAULT_ERROR_MARKER: &'static str = "Erro";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error marker
    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    /// Set the fraction precision
    #[must_use]
    pub const fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Set the log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set JSON log output
    #[must_use]
    pub const fn with_log_json(mut self, json: bool) -> Self {
        self.log_json = json;
        self
    }

    /// Parses configuration from YAML text
    pub fn from_yaml_str(text: &str) -> AppResult<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a YAML file
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&text)
    }

    /// Checks value ranges
    pub fn validate(&self) -> AppResult<()> {
        if self.error_marker.is_empty() {
            return Err(AppError::config("error_marker must not be empty"));
        }
        if self.max_fraction_digits > NumberFormat::MAX_FRACTION_DIGITS {
            return Err(AppError::config(format!(
                "max_fraction_digits must be at most {}, got {}",
                NumberFormat::MAX_FRACTION_DIGITS,
                self.max_fraction_digits
            )));
        }
        Ok(())
    }

    /// Number format derived from this configuration
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::with_fraction_digits(self.max_fraction_digits)
    }
}
