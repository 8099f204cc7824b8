//! Arithmetic core: keys, tokenizer, parser, evaluator and result formatting
//!
//! Nothing in here knows about the display buffer or any front-end.

pub mod evaluator;
pub mod format;
pub mod key;
mod operations;
pub mod parser;

pub use operations::{Arithmetic, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid result (NaN or other)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// A key label that is not on the keypad
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
}

impl CalcError {
    /// Short lowercase code for structured logs
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
            Self::Overflow => "overflow",
            Self::ParseError(_) => "parse_error",
            Self::EmptyExpression => "empty_expression",
            Self::InvalidResult(_) => "invalid_result",
            Self::UnknownKey(_) => "unknown_key",
        }
    }
}
