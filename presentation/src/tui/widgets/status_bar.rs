//! Status bar widget: generation indicator + key hints or error text

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: state indicator
        let (indicator, indicator_bg) = if self.state.generating {
            ("GENERATING", Color::Green)
        } else if self.state.load_phase.is_busy() {
            ("LOADING", Color::Yellow)
        } else {
            ("READY", Color::Blue)
        };
        let indicator_span = Span::styled(
            format!(" {} ", indicator),
            Style::default()
                .fg(Color::Black)
                .bg(indicator_bg)
                .add_modifier(Modifier::BOLD),
        );

        // Right: error text or key hints
        let right_text = if let Some(ref error) = self.state.error {
            error.clone()
        } else if self.state.generating {
            "Esc:stop  Ctrl+C:quit".to_string()
        } else {
            "Enter:send  Up/Down:scroll  Ctrl+C:quit".to_string()
        };
        let right_style = if self.state.error.is_some() {
            Style::default().fg(Color::Red).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };

        let indicator_width = indicator.len() as u16 + 2;
        buf.set_line(
            area.x,
            area.y,
            &Line::from(vec![indicator_span]),
            indicator_width,
        );

        let right_span = Span::styled(right_text.clone(), right_style);
        let right_width = (right_text.len() as u16).min(area.width.saturating_sub(indicator_width));
        let right_x = area.right().saturating_sub(right_width + 1);
        buf.set_line(right_x, area.y, &Line::from(vec![right_span]), right_width);
    }
}
