//! On-screen keypad
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ . ] [ 0 ] [ C ] [ + ]
//! [          =          ]
//! ```
//!
//! Buttons can be clicked with the mouse, and the last pressed key is
//! highlighted whichever way it was entered.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::key::Key;
use crate::core::Operation;

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button emits
    pub key: Key,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a released button
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }

    /// The character printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        self.key.label()
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.key {
            Key::Digit(_) => Style::default().fg(Color::White),
            Key::Decimal => Style::default().fg(Color::Cyan),
            Key::Operator(_) => Style::default().fg(Color::Yellow),
            Key::Equals => Style::default().fg(Color::Green),
            Key::Clear => Style::default().fg(Color::Red),
        }
    }
}

/// The keypad layout: four rows of four, then a full-width "="
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |d| KeypadButton::new(Key::Digit(d));
        let op = |o| KeypadButton::new(Key::Operator(o));

        let rows = vec![
            vec![digit(7), digit(8), digit(9), op(Operation::Divide)],
            vec![digit(4), digit(5), digit(6), op(Operation::Multiply)],
            vec![digit(1), digit(2), digit(3), op(Operation::Subtract)],
            vec![
                KeypadButton::new(Key::Decimal),
                digit(0),
                KeypadButton::new(Key::Clear),
                op(Operation::Add),
            ],
            vec![KeypadButton::new(Key::Equals)],
        ];

        Self { rows }
    }

    /// Finds the (row, col) of the button for `key`
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<(usize, usize)> {
        self.buttons_with_positions()
            .find(|(_, btn)| btn.key == key)
            .map(|(pos, _)| pos)
    }

    /// Highlights the button for `key`, releasing any other
    pub fn highlight(&mut self, key: Key) {
        for btn in self.rows.iter_mut().flatten() {
            btn.pressed = btn.key == key;
        }
    }

    /// The highlighted key, if any
    #[must_use]
    pub fn highlighted(&self) -> Option<Key> {
        self.buttons().find(|b| b.pressed).map(|b| b.key)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(
        &self,
    ) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.rows.iter().enumerate().flat_map(|(row, buttons)| {
            buttons
                .iter()
                .enumerate()
                .map(move |(col, btn)| ((row, col), btn))
        })
    }

    /// Converts a click position to the key under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        let inner = Self::inner(area);
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }

        let btn_height = inner.height / self.rows.len() as u16;
        if btn_height == 0 {
            return None;
        }
        let row = ((y - inner.y) / btn_height) as usize;
        let buttons = self.rows.get(row)?;

        let btn_width = inner.width / buttons.len() as u16;
        if btn_width == 0 {
            return None;
        }
        let col = ((x - inner.x) / btn_width) as usize;
        buttons.get(col).map(|b| b.key)
    }

    /// Area inside the border
    fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Keypad::inner(area);
        let rows = self.keypad.rows.len() as u16;
        if inner.width < 12 || inner.height < rows {
            return; // Too small to render
        }

        let btn_height = inner.height / rows;

        for (row, buttons) in self.keypad.rows.iter().enumerate() {
            let btn_width = inner.width / buttons.len() as u16;
            let y = inner.y + row as u16 * btn_height + btn_height / 2;

            for (col, btn) in buttons.iter().enumerate() {
                let x = inner.x + col as u16 * btn_width;
                let label = format!("[ {} ]", btn.label());
                let label_x = x + btn_width.saturating_sub(label.len() as u16) / 2;

                if y < inner.bottom() && label_x < inner.right() {
                    buf.set_span(label_x, y, &Span::styled(label, btn.style()), btn_width);
                }
            }
        }
    }
}
