//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::accumulator::{Keystroke, Rejection};
use crate::calculator::KeypadCalculator;
use crate::config::CalcConfig;
use crate::core::key::Key;

/// Calculator application state
#[derive(Debug, Clone, Default)]
pub struct CalculatorApp {
    /// Display buffer and evaluation
    calculator: KeypadCalculator,
    /// On-screen keypad, highlighting the last key
    keypad: Keypad,
    /// Outcome of the most recent key press
    last_keystroke: Option<Keystroke>,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app from configuration
    #[must_use]
    pub fn with_config(config: &CalcConfig) -> Self {
        Self {
            calculator: KeypadCalculator::with_config(config),
            ..Self::default()
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns true while the display shows the error marker
    #[must_use]
    pub fn shows_error(&self) -> bool {
        self.calculator.shows_error()
    }

    /// The on-screen keypad
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Outcome of the most recent key press
    #[must_use]
    pub const fn last_keystroke(&self) -> Option<Keystroke> {
        self.last_keystroke
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Signals the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a key and highlights its button
    pub fn press(&mut self, key: Key) -> Keystroke {
        self.keypad.highlight(key);
        let outcome = self.calculator.press(key);
        self.last_keystroke = Some(outcome);
        outcome
    }

    /// Presses the button under a click, if any
    pub fn click(&mut self, keypad_area: Rect, column: u16, row: u16) -> Option<Keystroke> {
        let key = self.keypad.hit_test(keypad_area, column, row)?;
        debug!(%key, column, row, "keypad click");
        Some(self.press(key))
    }

    /// Applies an input action. Returns true if the screen needs redrawing.
    pub fn handle_action(&mut self, action: KeyAction, keypad_area: Rect) -> bool {
        match action {
            KeyAction::Press(key) => {
                self.press(key);
                true
            }
            KeyAction::Click { column, row } => self.click(keypad_area, column, row).is_some(),
            KeyAction::Quit => {
                self.quit();
                false
            }
            KeyAction::None => false,
        }
    }

    /// One-line description of the last key press
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.last_keystroke {
            None | Some(Keystroke::Appended) => "Ready".to_string(),
            Some(Keystroke::Cleared) => "Cleared".to_string(),
            Some(Keystroke::Ignored) => "Nothing to evaluate".to_string(),
            Some(Keystroke::Rejected(Rejection::LeadingOperator)) => {
                "Ignored: an expression cannot start with an operator".to_string()
            }
            Some(Keystroke::Rejected(Rejection::ConsecutiveOperator)) => {
                "Ignored: operator after operator".to_string()
            }
            Some(Keystroke::Evaluated) => match self.calculator.last_error() {
                Some(err) => format!("✗ {err}"),
                None => "✓ Evaluated".to_string(),
            },
        }
    }
}
