//! Load panel: download progress, initialization notice, or failure.
//!
//! Rendered only until the model is ready.

use crate::tui::state::TuiState;
use localchat_domain::LoadPhase;
use localchat_domain::util::format_bytes_per_sec;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

pub struct LoadPanelWidget<'a> {
    state: &'a TuiState,
}

impl<'a> LoadPanelWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for LoadPanelWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Model ");

        match &self.state.load_phase {
            LoadPhase::Downloading {
                fraction,
                bytes_per_sec,
            } => {
                let percent = (fraction * 100.0).clamp(0.0, 100.0) as u16;
                let label = if *bytes_per_sec > 0 {
                    format!(
                        "Downloading model: {}% ({})",
                        percent,
                        format_bytes_per_sec(*bytes_per_sec)
                    )
                } else {
                    format!("Downloading model: {}%", percent)
                };
                Gauge::default()
                    .block(block)
                    .gauge_style(Style::default().fg(Color::Blue))
                    .percent(percent)
                    .label(label)
                    .render(area, buf);
            }
            LoadPhase::Initializing => {
                Paragraph::new("Initializing model... this may take a moment")
                    .style(Style::default().fg(Color::Yellow))
                    .block(block)
                    .render(area, buf);
            }
            LoadPhase::Failed { reason } => {
                Paragraph::new(format!("{}  (Ctrl+R to retry)", reason))
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true })
                    .block(block)
                    .render(area, buf);
            }
            LoadPhase::Idle => {
                Paragraph::new("Press Ctrl+R to load the model")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block)
                    .render(area, buf);
            }
            // Hidden by the layout once ready
            LoadPhase::Ready => {}
        }
    }
}
