//! Keyboard and mouse input mapping

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::core::key::Key;

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad key
    Press(Key),
    /// Left click at a screen position
    Click {
        /// Screen column
        column: u16,
        /// Screen row
        row: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> KeyAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => KeyAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Release and repeat events would double every press on some terminals
        if kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('c') | KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Key::Clear),
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Char(c) => Key::from_label(c).map_or(KeyAction::None, KeyAction::Press),
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => KeyAction::None,
        }
    }
}
