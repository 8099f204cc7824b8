//! Unified keypad driver
//!
//! One key script, any front-end: the headless core and the TUI app both
//! implement [`KeypadDriver`], so the same scenario runs against either.

use serde::Serialize;

use crate::accumulator::Keystroke;
use crate::calculator::KeypadCalculator;
use crate::core::CalcResult;

/// Abstract driver for keypad interactions
pub trait KeypadDriver {
    /// Presses the key with the given label
    fn press(&mut self, label: char) -> CalcResult<Keystroke>;

    /// Current display text
    fn display(&self) -> String;

    /// Presses every character of `script` in order, recording each step.
    /// Stops at the first unknown key.
    fn run_script(&mut self, script: &str) -> CalcResult<Vec<Step>> {
        script
            .chars()
            .map(|label| {
                let outcome = self.press(label)?;
                Ok(Step {
                    key: label,
                    outcome,
                    display: self.display(),
                })
            })
            .collect()
    }
}

/// One recorded key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Label of the pressed key
    pub key: char,
    /// What the press did
    #[serde(flatten)]
    pub outcome: Keystroke,
    /// Display text after the press
    pub display: String,
}

impl KeypadDriver for KeypadCalculator {
    fn press(&mut self, label: char) -> CalcResult<Keystroke> {
        let mut buf = [0u8; 4];
        self.handle_token(label.encode_utf8(&mut buf))
    }

    fn display(&self) -> String {
        KeypadCalculator::display(self).to_string()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, KeypadDriver, Keystroke};
    use crate::core::key::Key;
    use crate::core::CalcError;
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl KeypadDriver for TuiDriver {
        fn press(&mut self, label: char) -> CalcResult<Keystroke> {
            let key = Key::from_label(label)
                .ok_or_else(|| CalcError::UnknownKey(label.to_string()))?;
            Ok(self.app.press(key))
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }
    }
}
