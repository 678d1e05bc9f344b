//! src/view/components/status_line.rs

use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::ui_state::{Focus, UIMode};
use crate::view::theme;

pub struct StatusLine;

impl StatusLine {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, mode: &UIMode, focus: Focus, area: Rect) {
        let hints = match (focus, mode) {
            (Focus::SearchBar, _) => "Enter search · Tab grid · Esc clear · Ctrl+C quit",
            (Focus::Grid, UIMode::Populated(_)) => {
                "←↑↓→ move · Enter details · Tab search · Esc clear · q quit"
            }
            (Focus::Grid, _) => "Tab search · q quit",
        };

        let line = Line::from(Span::styled(hints, Style::default().fg(theme::COMMENT)));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
