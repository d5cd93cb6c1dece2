//! Screen layout: vertical stack of header, conversation, optional load
//! panel, input box, and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub header: Rect,
    pub conversation: Rect,
    /// Present until the model is ready.
    pub load_panel: Option<Rect>,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect, show_load_panel: bool) -> Self {
        let constraints = if show_load_panel {
            vec![
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
            ]
        } else {
            vec![
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ]
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        if show_load_panel {
            Self {
                header: chunks[0],
                conversation: chunks[1],
                load_panel: Some(chunks[2]),
                input: chunks[3],
                status_bar: chunks[4],
            }
        } else {
            Self {
                header: chunks[0],
                conversation: chunks[1],
                load_panel: None,
                input: chunks[2],
                status_bar: chunks[3],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_panel_appears_only_when_requested() {
        let area = Rect::new(0, 0, 80, 24);
        assert!(MainLayout::compute(area, true).load_panel.is_some());
        assert!(MainLayout::compute(area, false).load_panel.is_none());
    }
}
