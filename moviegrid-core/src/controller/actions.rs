//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum, which represents all possible user inputs and
//! internal events the application can respond to. Every inbound boundary
//! event (query submitted, item selected, dismiss key) maps to exactly one
//! named command here, so the transition table in the search state machine
//! stays the single place transitions are decided, independent of how
//! events are physically delivered.

use crate::catalog::types::MovieId;
use crate::controller::search_fsm::CycleToken;
use crate::tasks::search_cycle::CycleOutcome;

/// Represents a high-level action that the application can perform.
/// This abstracts away raw terminal events into meaningful commands.
#[derive(Debug, Clone)]
pub enum Action {
    /// Clear the search surface and return to idle.
    ClearSearch,

    /// A finished search cycle reporting back, tagged with its token.
    /// Applied only if the token is the most recent issued.
    CycleFinished {
        token: CycleToken,
        outcome: CycleOutcome,
    },

    /// Delete the character before the input cursor.
    DeleteCharBefore,

    /// The designated dismissal key fired while an overlay was open.
    DismissOverlay,

    /// Move focus between the search bar and the result grid.
    FocusNext,

    /// Insert a character at the input cursor.
    InsertChar(char),

    /// Move the grid selection by the given delta (columns or rows).
    MoveSelection(isize),

    /// No operation. Used when an event is consumed but no state change is
    /// needed.
    NoOp,

    /// Quit the application.
    Quit,

    /// A terminal resize event.
    Resize(u16, u16),

    /// Open the detail overlay for a rendered item. Resolved against the
    /// current result set only; ids from a superseded set are a no-op.
    SelectItem(MovieId),

    /// Submit the given raw query text (validated again at dispatch).
    SubmitQuery(String),

    /// An internal tick event driving the background animation.
    Tick,
}
