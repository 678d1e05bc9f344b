//! src/view/components/detail_overlay.rs
//! ============================================================================
//! # Detail Overlay
//!
//! Modal detail view for one selected record: poster reference, title,
//! year, rating, genre and synopsis, with the dismissal hint. Drawn last so
//! it sits above whatever mode is on the surface.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::catalog::types::{DetailRecord, Rating};
use crate::view::theme;

pub struct DetailOverlay;

impl DetailOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        record: &DetailRecord,
        placeholder: &str,
        area: Rect,
    ) {
        let overlay_area = centered_rect(70, 80, area);
        frame.render_widget(Clear, overlay_area);

        let rating = match &record.rating {
            Rating::Scored(score) => format!("⭐ {score:.1}"),
            Rating::Unrated => "⭐ unrated".to_string(),
        };

        let label = Style::default().fg(theme::CYAN).bold();
        let value = Style::default().fg(theme::FOREGROUND);

        let lines = vec![
            Line::from(Span::styled(
                record.title.as_str(),
                Style::default().fg(theme::PURPLE).bold(),
            )),
            Line::from(""),
            Line::from(vec![Span::styled("Year:   ", label), Span::styled(record.year.as_str(), value)]),
            Line::from(vec![Span::styled("Rating: ", label), Span::styled(rating, value)]),
            Line::from(vec![Span::styled("Genre:  ", label), Span::styled(record.genre.as_str(), value)]),
            Line::from(vec![
                Span::styled("Poster: ", label),
                Span::styled(
                    record.thumbnail.resolve(placeholder),
                    Style::default().fg(theme::CYAN).dim(),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled("Plot", label)),
            Line::from(Span::styled(record.synopsis.as_str(), value)),
            Line::from(""),
            Line::from(Span::styled(
                "Esc to close",
                Style::default().fg(theme::COMMENT).italic(),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Details ")
            .title_style(Style::default().fg(theme::PURPLE).bold())
            .border_style(theme::overlay_border_style())
            .style(Style::default().bg(theme::BACKGROUND));

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, overlay_area);
    }
}

impl Default for DetailOverlay {
    fn default() -> Self {
        Self::new()
    }
}

/// Rect centered in `area`, sized by percentage.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
