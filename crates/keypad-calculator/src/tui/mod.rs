//! Terminal front-end: display, clickable keypad, status line

mod app;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use terminal::TerminalGuard;
pub use ui::{layout, render, CalculatorUI, UiLayout};
