//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title of the outer frame
pub const TITLE: &str = " Keypad Calculator ";

/// Key bindings shown under the status line
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter/=", "evaluate"),
    ("c/Esc", "clear"),
    ("q", "quit"),
];

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Display box
    pub display: Rect,
    /// Keypad, including its border
    pub keypad: Rect,
    /// Status line
    pub status: Rect,
    /// Key binding help
    pub help: Rect,
}

/// Splits the terminal area into screen regions
#[must_use]
pub fn layout(area: Rect) -> UiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(7),    // Keypad
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    UiLayout {
        display: chunks[0],
        keypad: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.shows_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status_line();
        let style = if status.starts_with('✓') {
            Style::default().fg(Color::Green)
        } else if status.starts_with('✗') {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Span::styled(status, style)).render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, desc)) in HELP_SHORTCUTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, Style::default().fg(Color::DarkGray)));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area);
        self.render_display(regions.display, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
        self.render_status(regions.status, buf);
        Self::render_help(regions.help, buf);
    }
}
