//! src/controller/overlay.rs
//! ============================================================================
//! # Overlay Controller: At-Most-One Detail Overlay
//!
//! Manages the transient detail overlay and its process-wide dismissal key
//! binding. Invariants enforced here:
//!
//! - at most one overlay exists at any time; opening while open tears the
//!   existing one down first (replace-on-reopen path included);
//! - at most one dismissal binding is registered at any time, and any
//!   sequence of open/close calls ending in `close` leaves zero bindings;
//! - `close` is idempotent and releases the binding unconditionally.
//!
//! This component performs no I/O and has no failure mode. It is the only
//! writer of `OverlayState`.

use crossterm::event::KeyCode;
use tracing::debug;

use crate::catalog::types::DetailRecord;
use crate::model::ui_state::OverlayState;

/// The designated dismissal key.
pub const DISMISS_KEY: KeyCode = KeyCode::Esc;

/// The singleton dismissal-binding slot. Registering into an occupied slot
/// is a bug in the caller and is surfaced via `debug_assert`; releasing an
/// empty slot is a no-op by design.
#[derive(Debug, Default)]
struct DismissBinding {
    key: Option<KeyCode>,
}

impl DismissBinding {
    fn register(&mut self, key: KeyCode) {
        debug_assert!(self.key.is_none(), "dismissal binding already registered");
        self.key = Some(key);
    }

    /// Idempotent teardown.
    fn release(&mut self) {
        self.key = None;
    }

    fn matches(&self, key: KeyCode) -> bool {
        self.key == Some(key)
    }

    fn count(&self) -> usize {
        usize::from(self.key.is_some())
    }
}

#[derive(Debug, Default)]
pub struct OverlayController {
    state: OverlayState,
    binding: DismissBinding,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    /// Open the overlay for `item`. An already-open overlay is closed first
    /// so the singleton invariant holds on every path.
    pub fn open(&mut self, item: DetailRecord) {
        if self.is_open() {
            self.close();
        }

        debug!(id = %item.id, "opening detail overlay");
        self.state = OverlayState::Open(item);
        self.binding.register(DISMISS_KEY);
    }

    /// Close the overlay if present and unconditionally release the
    /// dismissal binding. Safe to call at any time, any number of times.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("closing detail overlay");
        }
        self.state = OverlayState::Closed;
        self.binding.release();
    }

    /// Whether this key press belongs to the overlay's dismissal binding.
    /// The event loop consults this before any other key handling.
    pub fn consumes(&self, key: KeyCode) -> bool {
        self.binding.matches(key)
    }

    /// Number of registered dismissal bindings (0 or 1 by invariant).
    pub fn active_bindings(&self) -> usize {
        self.binding.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn open_then_open_leaves_exactly_one_overlay_and_binding() {
        let mut overlay = OverlayController::new();
        overlay.open(record("ttX", "Movie X"));
        overlay.open(record("ttY", "Movie Y"));

        match overlay.state() {
            OverlayState::Open(item) => assert_eq!(item.title, "Movie Y"),
            OverlayState::Closed => panic!("overlay should be open"),
        }
        assert_eq!(overlay.active_bindings(), 1);
    }

    #[test]
    fn close_is_idempotent_and_releases_the_binding() {
        let mut overlay = OverlayController::new();
        overlay.close(); // never opened
        assert_eq!(overlay.active_bindings(), 0);

        overlay.open(record("ttX", "Movie X"));
        overlay.close();
        overlay.close();
        assert_eq!(overlay.state(), &OverlayState::Closed);
        assert_eq!(overlay.active_bindings(), 0);
    }

    #[test]
    fn any_open_close_sequence_ending_in_close_leaves_no_bindings() {
        let mut overlay = OverlayController::new();
        for i in 0..5 {
            overlay.open(record("ttX", &format!("Movie {i}")));
            if i % 2 == 0 {
                overlay.open(record("ttY", "Replacement"));
            }
            overlay.close();
        }
        assert_eq!(overlay.active_bindings(), 0);
        assert!(!overlay.is_open());
    }

    #[test]
    fn dismiss_key_is_consumed_only_while_open() {
        let mut overlay = OverlayController::new();
        assert!(!overlay.consumes(DISMISS_KEY));

        overlay.open(record("ttX", "Movie X"));
        assert!(overlay.consumes(DISMISS_KEY));
        assert!(!overlay.consumes(KeyCode::Enter));

        overlay.close();
        assert!(!overlay.consumes(DISMISS_KEY));
    }
}
