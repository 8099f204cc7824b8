//! Keypad Calculator
//!
//! A four-function calculator driven one key at a time. Keys accumulate
//! into a display buffer that refuses an operator at the start or straight
//! after another operator; "=" evaluates the buffer with the usual
//! precedence (`*` and `/` before `+` and `-`, left to right) and replaces
//! it with the result, or with an error marker when evaluation fails.
//!
//! Two front-ends share the same core: a terminal keypad (feature `tui`)
//! and headless key scripts (`--press`).
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = KeypadCalculator::new();
//! for key in ["2", "+", "3", "*", "4", "="] {
//!     calc.handle_token(key).unwrap();
//! }
//! assert_eq!(calc.display(), "14");
//!
//! // Errors replace the display with the marker
//! calc.handle_token("C").unwrap();
//! calc.run_script("5/0=").unwrap();
//! assert_eq!(calc.display(), "Erro");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod accumulator;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod headless;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::accumulator::{InputAccumulator, Keystroke, LastToken, Rejection};
    pub use crate::calculator::KeypadCalculator;
    pub use crate::config::CalcConfig;
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::format::NumberFormat;
    pub use crate::core::key::Key;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::driver::{KeypadDriver, Step};
    pub use crate::error::{AppError, AppResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::tui_driver::TuiDriver;
}
