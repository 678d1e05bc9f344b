//! src/view/components/result_grid.rs
//! ============================================================================
//! # Result Grid
//!
//! One card per enriched record, laid out in result-set order (the order
//! the search endpoint returned). Pure function of its inputs: equal
//! result set, selection and placeholder produce an identical buffer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::catalog::types::{DetailRecord, Rating, ResultSet};
use crate::model::ui_state::GRID_COLS;
use crate::view::theme;

const CARD_HEIGHT: u16 = 6;

pub struct ResultGrid;

impl ResultGrid {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        set: &ResultSet,
        selected: usize,
        grid_focused: bool,
        placeholder: &str,
        area: Rect,
    ) {
        let rows = set.len().div_ceil(GRID_COLS);
        let row_constraints: Vec<Constraint> =
            (0..rows).map(|_| Constraint::Length(CARD_HEIGHT)).collect();

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        let col_constraints: Vec<Constraint> = (0..GRID_COLS)
            .map(|_| Constraint::Ratio(1, GRID_COLS as u32))
            .collect();

        for (row_idx, row_area) in row_areas.iter().enumerate() {
            let card_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(col_constraints.clone())
                .split(*row_area);

            for col_idx in 0..GRID_COLS {
                let index = row_idx * GRID_COLS + col_idx;
                let Some(record) = set.get(index) else {
                    break;
                };
                let is_selected = grid_focused && index == selected;
                self.render_card(frame, record, is_selected, placeholder, card_areas[col_idx]);
            }
        }
    }

    fn render_card(
        &self,
        frame: &mut Frame<'_>,
        record: &DetailRecord,
        selected: bool,
        placeholder: &str,
        area: Rect,
    ) {
        let border_style = if selected {
            theme::card_selected_border_style()
        } else {
            theme::card_border_style()
        };

        let rating = match &record.rating {
            Rating::Scored(score) => Span::styled(
                format!("⭐ {score:.1}"),
                Style::default().fg(theme::YELLOW),
            ),
            Rating::Unrated => {
                Span::styled("⭐ unrated", Style::default().fg(theme::COMMENT))
            }
        };

        let lines = vec![
            Line::from(Span::styled(
                record.title.as_str(),
                Style::default().fg(theme::FOREGROUND).bold(),
            )),
            Line::from(Span::styled(
                record.year.as_str(),
                Style::default().fg(theme::COMMENT),
            )),
            Line::from(rating),
            Line::from(Span::styled(
                record.thumbnail.resolve(placeholder),
                Style::default().fg(theme::CYAN).dim(),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Default for ResultGrid {
    fn default() -> Self {
        Self::new()
    }
}
