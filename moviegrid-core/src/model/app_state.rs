//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Central Application State and Command Dispatch
//!
//! Aggregates the explicit state holders (search state machine, overlay
//! controller, input/selection bookkeeping) behind one owner. `dispatch`
//! is the single funnel every command goes through: no other call site
//! mutates `UIMode` or `OverlayState` directly.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

use crate::catalog::client::Catalog;
use crate::catalog::types::MovieId;
use crate::config::Config;
use crate::controller::actions::Action;
use crate::controller::overlay::OverlayController;
use crate::controller::search_fsm::SearchFsm;
use crate::model::ui_state::{Focus, UIMode, UIState};
use crate::tasks::search_cycle::spawn_search_cycle;

pub struct AppState {
    pub config: Arc<Config>,
    pub ui: UIState,
    pub search: SearchFsm,
    pub overlay: OverlayController,

    catalog: Arc<dyn Catalog>,
    action_tx: UnboundedSender<Action>,

    pub quit: bool,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        catalog: Arc<dyn Catalog>,
        action_tx: UnboundedSender<Action>,
    ) -> Self {
        Self {
            config,
            ui: UIState::new(),
            search: SearchFsm::new(),
            overlay: OverlayController::new(),
            catalog,
            action_tx,
            quit: false,
        }
    }

    /// Identifier of the currently selected card, if any.
    pub fn selected_id(&self) -> Option<MovieId> {
        match self.search.mode() {
            UIMode::Populated(set) => set.get(self.ui.selected).map(|r| r.id.clone()),
            _ => None,
        }
    }

    /// Process one command. The only mutation path for the whole model.
    pub fn dispatch(&mut self, action: Action) {
        trace!(?action, "dispatch");

        match action {
            Action::NoOp => {}

            Action::Quit => self.quit = true,

            Action::Resize(..) => self.ui.request_redraw(),

            Action::Tick => {
                // The decorative animation advances only while active; the
                // populated grid stays perfectly still.
                if self.search.background_active() {
                    self.ui.anim_frame = self.ui.anim_frame.wrapping_add(1);
                    self.ui.request_redraw();
                }
            }

            Action::InsertChar(ch) => self.ui.insert_char(ch),

            Action::DeleteCharBefore => {
                self.ui.delete_char_before();
            }

            Action::FocusNext => self.ui.toggle_focus(),

            Action::ClearSearch => {
                self.search.clear();
                self.ui.clear_input();
                self.ui.reset_selection();
                self.ui.focus = Focus::SearchBar;
            }

            Action::SubmitQuery(raw) => {
                // The state machine re-validates; an empty submission is
                // rejected here exactly as at the input-enablement layer.
                if let Some((token, query)) = self.search.submit(&raw) {
                    self.ui.reset_selection();
                    spawn_search_cycle(
                        self.catalog.clone(),
                        token,
                        query,
                        self.action_tx.clone(),
                    );
                }
            }

            Action::CycleFinished { token, outcome } => {
                if self.search.apply_outcome(token, outcome) {
                    self.ui.reset_selection();
                    if matches!(self.search.mode(), UIMode::Populated(_)) {
                        self.ui.focus = Focus::Grid;
                    }
                }
            }

            Action::MoveSelection(delta) => {
                if let UIMode::Populated(set) = self.search.mode() {
                    let len = set.len();
                    self.ui.move_selection(delta, len);
                }
            }

            Action::SelectItem(id) => {
                // Overlay lifecycle is independent of search cycles, but a
                // selection only resolves against the current set.
                if let UIMode::Populated(set) = self.search.mode() {
                    if let Some(record) = set.find(&id) {
                        self.overlay.open(record.clone());
                        self.ui.request_redraw();
                    }
                }
            }

            Action::DismissOverlay => {
                self.overlay.close();
                self.ui.request_redraw();
            }
        }
    }
}
