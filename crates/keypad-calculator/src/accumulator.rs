//! Input accumulator: the display buffer and keystroke validation
//!
//! The buffer is built by plain concatenation, one key label at a time.
//! Two keystrokes are refused: an operator on an empty buffer, and an
//! operator right after another operator. Decimal points are never
//! checked; `1.2.3` is accepted here and fails at evaluation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::key::Key;

/// Kind of the most recently appended key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastToken {
    /// Nothing appended since start or the last clear
    #[default]
    Unset,
    /// The last appended key was an operator
    Operator,
    /// The last appended key was a digit or decimal point
    Operand,
}

/// Why a keystroke was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Operator pressed while the buffer is empty
    LeadingOperator,
    /// Operator pressed right after another operator
    ConsecutiveOperator,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "reason")]
pub enum Keystroke {
    /// The key label was appended to the buffer
    Appended,
    /// The buffer was reset
    Cleared,
    /// The key was refused; the buffer is unchanged
    Rejected(Rejection),
    /// The buffer was replaced by a result or the error marker
    Evaluated,
    /// The key had no effect (e.g. "=" on an empty buffer)
    Ignored,
}

/// Display buffer plus last-token state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputAccumulator {
    buffer: String,
    last_token: LastToken,
}

impl InputAccumulator {
    /// Creates an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Kind of the most recently appended key
    #[must_use]
    pub const fn last_token(&self) -> LastToken {
        self.last_token
    }

    /// Returns true if the buffer is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Applies one key press.
    ///
    /// `Key::Equals` is not handled here; evaluation belongs to the owner
    /// of the buffer, so it is reported as `Ignored`.
    pub fn handle_token(&mut self, key: Key) -> Keystroke {
        let Some(ch) = key.appended_char() else {
            return match key {
                Key::Clear => {
                    self.clear();
                    Keystroke::Cleared
                }
                _ => Keystroke::Ignored,
            };
        };

        if key.is_operator() {
            if !self.buffer.is_empty() && self.last_token == LastToken::Operator {
                trace!(%key, buffer = %self.buffer, "rejected consecutive operator");
                return Keystroke::Rejected(Rejection::ConsecutiveOperator);
            }
            if self.buffer.is_empty() {
                trace!(%key, "rejected leading operator");
                return Keystroke::Rejected(Rejection::LeadingOperator);
            }
        }

        self.buffer.push(ch);
        self.last_token = if key.is_operator() {
            LastToken::Operator
        } else {
            LastToken::Operand
        };
        trace!(%key, buffer = %self.buffer, "appended");
        Keystroke::Appended
    }

    /// Resets the buffer and last-token state
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_token = LastToken::Unset;
    }

    /// Replaces the buffer text, leaving the last-token state as it was
    pub(crate) fn replace(&mut self, text: String) {
        self.buffer = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    const ADD: Key = Key::Operator(Operation::Add);
    const MUL: Key = Key::Operator(Operation::Multiply);
    const SUB: Key = Key::Operator(Operation::Subtract);

    fn press_all(acc: &mut InputAccumulator, labels: &str) -> Vec<Keystroke> {
        labels
            .chars()
            .map(|c| acc.handle_token(Key::from_label(c).unwrap()))
            .collect()
    }

    // ===== Construction =====

    #[test]
    fn test_new_is_empty_and_unset() {
        let acc = InputAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.buffer(), "");
        assert_eq!(acc.last_token(), LastToken::Unset);
    }

    // ===== Appending =====

    #[test]
    fn test_digits_concatenate() {
        let mut acc = InputAccumulator::new();
        let outcomes = press_all(&mut acc, "1207");
        assert!(outcomes.iter().all(|o| *o == Keystroke::Appended));
        assert_eq!(acc.buffer(), "1207");
        assert_eq!(acc.last_token(), LastToken::Operand);
    }

    #[test]
    fn test_multiple_decimal_points_accepted() {
        let mut acc = InputAccumulator::new();
        press_all(&mut acc, "1.2.3");
        assert_eq!(acc.buffer(), "1.2.3");
    }

    #[test]
    fn test_leading_decimal_point_accepted() {
        let mut acc = InputAccumulator::new();
        assert_eq!(acc.handle_token(Key::Decimal), Keystroke::Appended);
        assert_eq!(acc.buffer(), ".");
        assert_eq!(acc.last_token(), LastToken::Operand);
    }

    #[test]
    fn test_operator_after_operand() {
        let mut acc = InputAccumulator::new();
        press_all(&mut acc, "7");
        assert_eq!(acc.handle_token(ADD), Keystroke::Appended);
        assert_eq!(acc.buffer(), "7+");
        assert_eq!(acc.last_token(), LastToken::Operator);
    }

    #[test]
    fn test_operator_after_decimal_point() {
        let mut acc = InputAccumulator::new();
        press_all(&mut acc, "3.");
        assert_eq!(acc.handle_token(MUL), Keystroke::Appended);
        assert_eq!(acc.buffer(), "3.*");
    }

    // ===== Rejections =====

    #[test]
    fn test_leading_operator_rejected() {
        let mut acc = InputAccumulator::new();
        for op in Operation::ALL {
            assert_eq!(
                acc.handle_token(Key::Operator(op)),
                Keystroke::Rejected(Rejection::LeadingOperator)
            );
        }
        assert_eq!(acc.buffer(), "");
        assert_eq!(acc.last_token(), LastToken::Unset);
    }

    #[test]
    fn test_consecutive_operator_rejected() {
        let mut acc = InputAccumulator::new();
        press_all(&mut acc, "7+");
        assert_eq!(
            acc.handle_token(ADD),
            Keystroke::Rejected(Rejection::ConsecutiveOperator)
        );
        assert_eq!(
            acc.handle_token(SUB),
            Keystroke::Rejected(Rejection::ConsecutiveOperator)
        );
        assert_eq!(acc.buffer(), "7+");
        assert_eq!(acc.last_token(), LastToken::Operator);
    }

    #[test]
    fn test_operand_after_rejection_resumes() {
        let mut acc = InputAccumulator::new();
        press_all(&mut acc, "7++3");
        assert_eq!(acc.buffer(), "7+3");
        assert_eq!(acc.last_token(), LastToken::Operand);
    }

    // ===== Clear =====

    #[test]
    fn test_clear_resets_everything() {
        let mut acc = InputAccumulator::new();
        press_all(&mut acc, "12*");
        assert_eq!(acc.handle_token(Key::Clear), Keystroke::Cleared);
        assert_eq!(acc.buffer(), "");
        assert_eq!(acc.last_token(), LastToken::Unset);
    }

    #[test]
    fn test_clear_on_empty() {
        let mut acc = InputAccumulator::new();
        assert_eq!(acc.handle_token(Key::Clear), Keystroke::Cleared);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_operator_after_clear_rejected() {
        let mut acc = InputAccumulator::new();
        press_all(&mut acc, "5C");
        assert_eq!(
            acc.handle_token(ADD),
            Keystroke::Rejected(Rejection::LeadingOperator)
        );
    }

    // ===== Equals and replace =====

    #[test]
    fn test_equals_is_ignored() {
        let mut acc = InputAccumulator::new();
        press_all(&mut acc, "2+");
        assert_eq!(acc.handle_token(Key::Equals), Keystroke::Ignored);
        assert_eq!(acc.buffer(), "2+");
    }

    #[test]
    fn test_replace_keeps_last_token() {
        let mut acc = InputAccumulator::new();
        press_all(&mut acc, "3+");
        acc.replace("Erro".to_string());
        assert_eq!(acc.buffer(), "Erro");
        assert_eq!(acc.last_token(), LastToken::Operator);
        assert_eq!(
            acc.handle_token(ADD),
            Keystroke::Rejected(Rejection::ConsecutiveOperator)
        );
    }

    // ===== Keystroke =====

    #[test]
    fn test_keystroke_serialization() {
        let json = serde_json::to_string(&Keystroke::Rejected(Rejection::ConsecutiveOperator))
            .unwrap();
        assert_eq!(json, r#"{"outcome":"rejected","reason":"consecutive_operator"}"#);
        let json = serde_json::to_string(&Keystroke::Appended).unwrap();
        assert_eq!(json, r#"{"outcome":"appended"}"#);
    }
}
