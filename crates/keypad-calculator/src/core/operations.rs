//! The four keypad operators and checked arithmetic over them

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operators available on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Division (/)
    Divide,
    /// Multiplication (*)
    Multiply,
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
}

impl Operation {
    /// The operator set, in keypad column order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Add, Self::Subtract];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Divide => '/',
            Self::Multiply => '*',
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    /// Maps an operator symbol back to its operation
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '/' => Some(Self::Divide),
            '*' => Some(Self::Multiply),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            _ => None,
        }
    }

    /// Binding power (higher = evaluated first)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }
}

/// Checked arithmetic: every result is finite or an error
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl Arithmetic {
    /// Applies `op` to two operands
    pub fn apply(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_finite(a / b)
    }

    /// Negation; cannot overflow
    pub fn negate(a: f64) -> CalcResult<f64> {
        Self::check_finite(-a)
    }

    /// Rejects NaN and infinities
    pub fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}
