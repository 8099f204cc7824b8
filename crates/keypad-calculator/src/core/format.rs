//! Result formatting
//!
//! Policy: integral results print without a fractional part (`4/2` shows
//! `2`); everything else prints fixed-point with trailing zeros trimmed.

use serde::{Deserialize, Serialize};

/// Renders evaluation results for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Digits kept after the decimal point before trimming
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberFormat {
    /// Default number of fraction digits
    pub const DEFAULT_FRACTION_DIGITS: usize = 10;

    /// Upper bound on fraction digits; beyond this f64 prints noise
    pub const MAX_FRACTION_DIGITS: usize = 15;

    /// Integral values below this magnitude print as integers
    const INTEGER_LIMIT: f64 = 1e15;

    /// Creates the default format
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_fraction_digits: Self::DEFAULT_FRACTION_DIGITS,
        }
    }

    /// Creates a format with a custom fraction precision (clamped)
    #[must_use]
    pub fn with_fraction_digits(digits: usize) -> Self {
        Self {
            max_fraction_digits: digits.min(Self::MAX_FRACTION_DIGITS),
        }
    }

    /// Formats a finite value
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let text = if value.fract() == 0.0 && value.abs() < Self::INTEGER_LIMIT {
            format!("{value:.0}")
        } else {
            let fixed = format!("{value:.prec$}", prec = self.max_fraction_digits);
            if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                fixed
            }
        };

        // Negative zero, or a tiny negative rounded away
        if text == "-0" {
            "0".to_string()
        } else {
            text
        }
    }
}
