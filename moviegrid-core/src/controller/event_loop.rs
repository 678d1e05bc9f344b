//! src/controller/event_loop.rs
//! ============================================================================
//! # Event Loop Controller
//!
//! The single cooperative loop: terminal events, finished-cycle reports and
//! animation ticks are all funneled into `Action`s and dispatched through
//! `AppState`. Raw key events are translated here — the overlay's dismissal
//! binding is consulted before any other key handling, so an open overlay
//! owns its key — and the loop redraws whenever the model asks for it.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::{mpsc, Mutex};
use tracing::{info, warn};

use crate::controller::actions::Action;
use crate::error::AppError;
use crate::model::app_state::AppState;
use crate::model::ui_state::{Focus, GRID_COLS};
use crate::view::ui::UIRenderer;

/// Translate a raw key event into a semantic command.
///
/// Precedence: overlay dismissal binding, then global chords, then the
/// focused surface. Pure with respect to `app`; all mutation happens in
/// dispatch.
pub fn map_key(app: &AppState, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::NoOp;
    }

    if app.overlay.consumes(key.code) {
        return Action::DismissOverlay;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.ui.focus {
        Focus::SearchBar => match key.code {
            // Submission is gated at the input layer; the state machine
            // re-checks on dispatch.
            KeyCode::Enter if app.ui.can_submit() => {
                Action::SubmitQuery(app.ui.input.to_string())
            }
            KeyCode::Enter => Action::NoOp,
            KeyCode::Esc => Action::ClearSearch,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::Backspace => Action::DeleteCharBefore,
            // Only plain (or shifted) characters are text input; unhandled
            // chords like Ctrl+A must not insert their literal character.
            KeyCode::Char(ch) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                Action::InsertChar(ch)
            }
            _ => Action::NoOp,
        },

        Focus::Grid => match key.code {
            KeyCode::Left => Action::MoveSelection(-1),
            KeyCode::Right => Action::MoveSelection(1),
            KeyCode::Up => Action::MoveSelection(-(GRID_COLS as isize)),
            KeyCode::Down => Action::MoveSelection(GRID_COLS as isize),
            KeyCode::Enter => app.selected_id().map_or(Action::NoOp, Action::SelectItem),
            KeyCode::Tab | KeyCode::Char('/') => Action::FocusNext,
            KeyCode::Esc => Action::ClearSearch,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::NoOp,
        },
    }
}

pub struct EventLoop {
    app: Arc<Mutex<AppState>>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    event_stream: EventStream,
    renderer: UIRenderer,
    tick_rate: Duration,
}

impl EventLoop {
    pub fn new(
        app: Arc<Mutex<AppState>>,
        action_rx: mpsc::UnboundedReceiver<Action>,
        tick_rate: Duration,
    ) -> Self {
        info!("Initializing event loop controller");
        Self {
            app,
            action_rx,
            event_stream: EventStream::new(),
            renderer: UIRenderer::new(),
            tick_rate,
        }
    }

    /// Run until a quit command lands. Redraws after every dispatched
    /// command that requested one.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut ticker = tokio::time::interval(self.tick_rate);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            {
                let mut app = self.app.lock().await;
                if app.quit {
                    info!("Quit requested, leaving event loop");
                    break;
                }
                if app.ui.needs_redraw {
                    let renderer = &mut self.renderer;
                    terminal
                        .draw(|frame| renderer.render(frame, &app))
                        .map_err(|e| AppError::terminal(e.to_string()))?;
                    app.ui.clear_redraw();
                }
            }

            tokio::select! {
                maybe_event = self.event_stream.next() => {
                    match maybe_event {
                        Some(Ok(TermEvent::Key(key))) => {
                            let mut app = self.app.lock().await;
                            let action = map_key(&app, key);
                            app.dispatch(action);
                        }
                        Some(Ok(TermEvent::Resize(w, h))) => {
                            self.app.lock().await.dispatch(Action::Resize(w, h));
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            warn!("Terminal event error: {e}");
                        }
                        None => {
                            info!("Terminal event stream closed");
                            break;
                        }
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    self.app.lock().await.dispatch(action);
                }

                _ = ticker.tick() => {
                    self.app.lock().await.dispatch(Action::Tick);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::ui_state::UIMode;
    use crate::tasks::search_cycle::CycleOutcome;
    use crate::test_support::{result_set, StubCatalog};

    fn app() -> AppState {
        let (tx, _rx) = mpsc::unbounded_channel();
        AppState::new(
            Arc::new(Config::default()),
            Arc::new(StubCatalog::new()),
            tx,
        )
    }

    fn populated_app() -> AppState {
        let mut app = app();
        let (token, _) = app.search.submit("dune").unwrap();
        let set = result_set(&[("ttA", "Movie A"), ("ttB", "Movie B")]);
        app.search.apply_outcome(token, CycleOutcome::Enriched(set));
        app.ui.focus = Focus::Grid;
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_on_empty_input_maps_to_noop() {
        let app = app();
        assert!(matches!(map_key(&app, press(KeyCode::Enter)), Action::NoOp));
    }

    #[test]
    fn enter_on_typed_input_maps_to_submit() {
        let mut app = app();
        for ch in "dune".chars() {
            app.ui.insert_char(ch);
        }
        match map_key(&app, press(KeyCode::Enter)) {
            Action::SubmitQuery(raw) => assert_eq!(raw, "dune"),
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn open_overlay_owns_the_dismiss_key() {
        let mut app = populated_app();
        let id = app.selected_id().unwrap();
        app.dispatch(Action::SelectItem(id));
        assert!(app.overlay.is_open());

        // Esc goes to the overlay, not to ClearSearch.
        assert!(matches!(
            map_key(&app, press(KeyCode::Esc)),
            Action::DismissOverlay
        ));

        app.dispatch(Action::DismissOverlay);
        assert!(matches!(
            map_key(&app, press(KeyCode::Esc)),
            Action::ClearSearch
        ));
    }

    #[test]
    fn grid_keys_move_selection_and_select() {
        let mut app = populated_app();
        assert!(matches!(
            map_key(&app, press(KeyCode::Right)),
            Action::MoveSelection(1)
        ));

        app.dispatch(Action::MoveSelection(1));
        match map_key(&app, press(KeyCode::Enter)) {
            Action::SelectItem(id) => assert_eq!(id.as_str(), "ttB"),
            other => panic!("expected select, got {other:?}"),
        }
    }

    #[test]
    fn chords_do_not_insert_their_literal_character() {
        let app = app();

        let chord = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert!(matches!(map_key(&app, chord), Action::NoOp));

        let chord = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert!(matches!(map_key(&app, chord), Action::NoOp));

        // Shifted characters are still text input.
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert!(matches!(map_key(&app, shifted), Action::InsertChar('A')));
    }

    #[test]
    fn ctrl_c_quits_from_any_focus() {
        let app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(map_key(&app, key), Action::Quit));
    }

    #[test]
    fn esc_in_search_bar_clears_back_to_idle() {
        let mut app = populated_app();
        app.ui.focus = Focus::SearchBar;
        let action = map_key(&app, press(KeyCode::Esc));
        app.dispatch(action);
        assert_eq!(app.search.mode(), &UIMode::Idle);
    }
}
