//! Input widget: the message entry box.
//!
//! Greyed out while a generation is in flight or the model is not ready,
//! matching the controller's own guards.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.state.load_phase.is_ready() && !self.state.generating;
        let color = if active { Color::Green } else { Color::DarkGray };

        let prompt_span = Span::styled(
            "> ",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );

        let mut spans = vec![prompt_span];
        if active {
            let (before, after) = self.state.input.split_at(self.state.cursor_pos);
            let cursor_char = after.chars().next();
            spans.push(Span::raw(before.to_string()));
            match cursor_char {
                Some(c) => {
                    spans.push(Span::styled(
                        c.to_string(),
                        Style::default().add_modifier(Modifier::REVERSED),
                    ));
                    spans.push(Span::raw(after[c.len_utf8()..].to_string()));
                }
                None => {
                    spans.push(Span::styled(
                        " ",
                        Style::default().add_modifier(Modifier::REVERSED),
                    ));
                }
            }
        } else {
            spans.push(Span::styled(
                self.state.input.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .style(Style::default().fg(color));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
