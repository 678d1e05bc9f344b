//! src/view/ui.rs
//! ============================================================================
//! # Frame Renderer
//!
//! Draws the whole surface from the *read-only* application state: search
//! bar, one mode's content (never a mix), status line, and the detail
//! overlay on top when open. A pure function of state — rendering the same
//! state twice produces an identical buffer.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::model::app_state::AppState;
use crate::model::ui_state::UIMode;
use crate::view::components::{
    background::Background, detail_overlay::DetailOverlay, result_grid::ResultGrid,
    search_bar::SearchBar, status_line::StatusLine,
};
use crate::model::ui_state::OverlayState;
use crate::view::theme;

pub struct UIRenderer {
    background: Background,
    search_bar: SearchBar,
    grid: ResultGrid,
    status: StatusLine,
    overlay: DetailOverlay,
}

impl UIRenderer {
    pub fn new() -> Self {
        Self {
            background: Background::new(),
            search_bar: SearchBar::new(),
            grid: ResultGrid::new(),
            status: StatusLine::new(),
            overlay: DetailOverlay::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, app: &AppState) {
        let full = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // search bar
                Constraint::Min(0),    // content
                Constraint::Length(1), // status line
            ])
            .split(full);

        self.search_bar.render(frame, &app.ui, chunks[0]);

        // Activity is decided by the state machine, not here.
        self.background.set_active(app.search.background_active());

        let placeholder = app.config.ui.placeholder_thumb.as_str();
        let content = chunks[1];

        match app.search.mode() {
            UIMode::Idle => {
                self.background.render(frame, app.ui.anim_frame, content);
            }
            UIMode::Searching => {
                self.render_status_message(frame, "Searching...", false, content);
            }
            UIMode::Error(message) => {
                self.background.render(frame, app.ui.anim_frame, content);
                self.render_status_message(frame, message, true, content);
            }
            UIMode::Populated(set) => {
                self.grid.render(
                    frame,
                    set,
                    app.ui.selected,
                    app.ui.focus == crate::model::ui_state::Focus::Grid,
                    placeholder,
                    content,
                );
            }
        }

        self.status
            .render(frame, app.search.mode(), app.ui.focus, chunks[2]);

        if let OverlayState::Open(record) = app.overlay.state() {
            self.overlay.render(frame, record, placeholder, full);
        }
    }

    /// Centered transient/error message in the content area.
    fn render_status_message(&self, frame: &mut Frame<'_>, message: &str, is_error: bool, area: Rect) {
        let style = if is_error {
            theme::error_style().bold()
        } else {
            theme::status_message_style()
        };

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(area);

        let line = Line::from(Span::styled(message, style));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), vertical[1]);
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}
