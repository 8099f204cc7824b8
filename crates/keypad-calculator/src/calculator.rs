//! The keypad calculator: accumulator + evaluator behind two entry points
//!
//! Front-ends call [`KeypadCalculator::handle_token`] (or [`press`]) for
//! every button and re-render [`KeypadCalculator::display`] afterwards.
//!
//! [`press`]: KeypadCalculator::press

use tracing::debug;

use crate::accumulator::{InputAccumulator, Keystroke, LastToken};
use crate::config::CalcConfig;
use crate::core::evaluator::Evaluator;
use crate::core::format::NumberFormat;
use crate::core::key::Key;
use crate::core::{CalcError, CalcResult};

/// Keypad calculator state
#[derive(Debug, Clone)]
pub struct KeypadCalculator {
    input: InputAccumulator,
    evaluator: Evaluator,
    format: NumberFormat,
    error_marker: String,
    last_error: Option<CalcError>,
}

impl Default for KeypadCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadCalculator {
    /// Creates a calculator with default formatting and error marker
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalcConfig::default())
    }

    /// Creates a calculator from configuration
    #[must_use]
    pub fn with_config(config: &CalcConfig) -> Self {
        Self {
            input: InputAccumulator::new(),
            evaluator: Evaluator::new(),
            format: config.number_format(),
            error_marker: config.error_marker.clone(),
            last_error: None,
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.input.buffer()
    }

    /// Kind of the most recently appended key (stale after "=")
    #[must_use]
    pub const fn last_token(&self) -> LastToken {
        self.input.last_token()
    }

    /// Reason the last evaluation failed, until the next evaluation or clear
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns true if the display currently shows the error marker
    #[must_use]
    pub fn shows_error(&self) -> bool {
        self.last_error.is_some() && self.display() == self.error_marker
    }

    /// The configured error marker
    #[must_use]
    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }

    /// Applies a key press by label ("7", "+", "C", "=", ...)
    pub fn handle_token(&mut self, label: &str) -> CalcResult<Keystroke> {
        let key: Key = label.parse()?;
        Ok(self.press(key))
    }

    /// Applies a typed key press
    pub fn press(&mut self, key: Key) -> Keystroke {
        match key {
            Key::Equals => {
                if self.input.is_empty() {
                    Keystroke::Ignored
                } else {
                    self.evaluate();
                    Keystroke::Evaluated
                }
            }
            Key::Clear => {
                self.last_error = None;
                self.input.handle_token(key)
            }
            _ => self.input.handle_token(key),
        }
    }

    /// Evaluates the display and replaces it with the result or the error
    /// marker. An empty display is left alone. Never fails.
    pub fn evaluate(&mut self) -> &str {
        if self.input.is_empty() {
            return self.display();
        }

        match self.evaluator.evaluate_str(self.input.buffer()) {
            Ok(value) => {
                let text = self.format.format(value);
                debug!(expression = %self.input.buffer(), result = %text, "evaluated");
                self.last_error = None;
                self.input.replace(text);
            }
            Err(err) => {
                debug!(
                    expression = %self.input.buffer(),
                    error = %err,
                    code = err.code(),
                    "evaluation failed"
                );
                self.last_error = Some(err);
                self.input.replace(self.error_marker.clone());
            }
        }

        self.display()
    }
}
