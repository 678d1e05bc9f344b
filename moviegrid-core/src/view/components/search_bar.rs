//! src/view/components/search_bar.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::ui_state::{Focus, UIState};
use crate::view::theme;

const EMPTY_HINT: &str = "Type a movie title, Enter to search";

pub struct SearchBar;

impl SearchBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, ui: &UIState, area: Rect) {
        let focused = ui.focus == Focus::SearchBar;

        let border_style = if focused {
            theme::card_selected_border_style()
        } else {
            theme::card_border_style()
        };

        // The submit affordance is part of the title: dim while the input
        // is empty (submission disabled), highlighted once it would fire.
        let submit_hint = if ui.can_submit() {
            Span::styled(" [Enter] ", Style::default().fg(theme::GREEN).bold())
        } else {
            Span::styled(" [Enter] ", Style::default().fg(theme::COMMENT))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .title_style(Style::default().fg(theme::PURPLE).bold())
            .title_bottom(Line::from(submit_hint).right_aligned())
            .border_style(border_style);

        let content = if ui.input.is_empty() {
            Line::from(Span::styled(
                EMPTY_HINT,
                Style::default().fg(theme::COMMENT).italic(),
            ))
        } else {
            Line::from(Span::styled(
                ui.input.as_str(),
                Style::default().fg(theme::FOREGROUND),
            ))
        };

        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(content).block(block), area);

        if focused {
            let col = cursor_col(&ui.input, ui.input_cursor);
            let cursor_x = inner.x + col.min(inner.width.saturating_sub(1) as usize) as u16;
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal column for a byte cursor. The cursor is always kept on a char
/// boundary by the input editing ops, so the prefix slice is valid.
fn cursor_col(input: &str, byte_cursor: usize) -> usize {
    input[..byte_cursor].chars().count()
}
