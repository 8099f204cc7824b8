//! Keypad keys
//!
//! Every button emits exactly one `Key`. Labels are single characters, so a
//! key script like `"12+3="` is just a sequence of labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Operation};

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// One of the four operators
    Operator(Operation),
    /// Clear ("C")
    Clear,
    /// Evaluate ("=")
    Equals,
}

impl Key {
    /// Creates a digit key; `None` for anything above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// The character printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Operator(op) => op.symbol(),
            Self::Clear => 'C',
            Self::Equals => '=',
        }
    }

    /// Parses a button label
    #[must_use]
    pub fn from_label(label: char) -> Option<Self> {
        match label {
            '0'..='9' => label
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Self::digit),
            '.' => Some(Self::Decimal),
            'C' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            other => Operation::from_symbol(other).map(Self::Operator),
        }
    }

    /// Returns true for the four operator keys
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// The text this key appends to the display, if any
    #[must_use]
    pub fn appended_char(&self) -> Option<char> {
        match self {
            Self::Digit(_) | Self::Decimal | Self::Operator(_) => Some(self.label()),
            Self::Clear | Self::Equals => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => {
                Self::from_label(label).ok_or_else(|| CalcError::UnknownKey(s.to_string()))
            }
            _ => Err(CalcError::UnknownKey(s.to_string())),
        }
    }
}
