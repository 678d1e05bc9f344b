//! src/controller/search_fsm.rs
//! ============================================================================
//! # Search State Machine
//!
//! Owns the `UIMode` transition table:
//!
//! ```text
//! Idle → Searching → {Error | Populated} → Searching (new query)
//!                                        → Idle (cleared)
//! ```
//!
//! Submission re-validates the query even though the input layer already
//! gates the affordance. Every accepted submission issues a monotonically
//! increasing cycle token; a cycle's outcome is applied only if its token is
//! the most recent issued, which makes last-submission-wins the sole
//! ordering guarantee across overlapping cycles. Stale cycles are not
//! cancelled at the transport level — their outcome is simply discarded.

use tracing::{debug, info};

use crate::catalog::types::Query;
use crate::model::ui_state::UIMode;
use crate::tasks::search_cycle::CycleOutcome;

/// Fixed user-facing message for a well-formed empty result.
pub const MSG_NO_MATCHES: &str = "No movies found";

/// Fixed user-facing message for every other cycle failure.
pub const MSG_FETCH_FAILED: &str = "Error fetching movies";

/// Monotonically increasing search cycle identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleToken(u64);

impl CycleToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// The search state machine. The only writer of `UIMode`.
#[derive(Debug)]
pub struct SearchFsm {
    mode: UIMode,
    issued: u64,
}

impl Default for SearchFsm {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFsm {
    pub fn new() -> Self {
        Self {
            mode: UIMode::Idle,
            issued: 0,
        }
    }

    pub fn mode(&self) -> &UIMode {
        &self.mode
    }

    /// Whether the decorative background animation is active: it runs in
    /// `Idle` and `Error`, and is suppressed in `Searching` and `Populated`.
    pub fn background_active(&self) -> bool {
        matches!(self.mode, UIMode::Idle | UIMode::Error(_))
    }

    /// Validate and accept a submission.
    ///
    /// Returns the token and parsed query for the cycle the caller should
    /// spawn, or `None` if the input was empty/whitespace (no transition).
    /// Entering `Searching` replaces the mode wholesale, so no stale results
    /// are observable while the new cycle is in flight.
    pub fn submit(&mut self, raw: &str) -> Option<(CycleToken, Query)> {
        let query = Query::parse(raw)?;

        self.issued += 1;
        let token = CycleToken(self.issued);
        self.mode = UIMode::Searching;

        info!(token = token.value(), query = query.as_str(), "search cycle started");
        Some((token, query))
    }

    /// Apply a finished cycle's outcome. Returns `false` when the outcome
    /// belonged to a superseded cycle and was discarded.
    pub fn apply_outcome(&mut self, token: CycleToken, outcome: CycleOutcome) -> bool {
        if token.0 != self.issued {
            debug!(
                token = token.value(),
                latest = self.issued,
                "discarding stale cycle outcome"
            );
            return false;
        }

        self.mode = match outcome {
            CycleOutcome::Enriched(set) => UIMode::Populated(set),
            CycleOutcome::NoMatches => UIMode::Error(MSG_NO_MATCHES.into()),
            CycleOutcome::Failed(e) => {
                // Raw detail is diagnostics-only; the surface gets the
                // fixed message.
                info!(token = token.value(), error = %e, "search cycle failed");
                UIMode::Error(MSG_FETCH_FAILED.into())
            }
        };
        true
    }

    /// Clear the surface back to idle.
    pub fn clear(&mut self) {
        self.mode = UIMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::ResultSet;
    use crate::error::CatalogError;
    use crate::test_support::record;

    #[test]
    fn empty_submission_causes_no_transition() {
        let mut fsm = SearchFsm::new();
        assert!(fsm.submit("").is_none());
        assert!(fsm.submit("   \t").is_none());
        assert_eq!(fsm.mode(), &UIMode::Idle);
    }

    #[test]
    fn submission_transitions_idle_to_searching_exactly_once() {
        let mut fsm = SearchFsm::new();
        let (token, query) = fsm.submit("  dune ").unwrap();
        assert_eq!(query.as_str(), "dune");
        assert_eq!(token.value(), 1);
        assert_eq!(fsm.mode(), &UIMode::Searching);
    }

    #[test]
    fn outcome_messages_are_fixed_and_non_technical() {
        let mut fsm = SearchFsm::new();

        let (token, _) = fsm.submit("dune").unwrap();
        assert!(fsm.apply_outcome(token, CycleOutcome::NoMatches));
        assert_eq!(fsm.mode(), &UIMode::Error(MSG_NO_MATCHES.into()));

        let (token, _) = fsm.submit("dune").unwrap();
        let failure = CatalogError::Transport("dns failure: no such host".into());
        assert!(fsm.apply_outcome(token, CycleOutcome::Failed(failure)));
        assert_eq!(fsm.mode(), &UIMode::Error(MSG_FETCH_FAILED.into()));
    }

    #[test]
    fn last_submission_wins_in_either_completion_order() {
        // Q2's outcome lands first, Q1's stale outcome must be discarded.
        let mut fsm = SearchFsm::new();
        let (t1, _) = fsm.submit("q1").unwrap();
        let (t2, _) = fsm.submit("q2").unwrap();

        let set2 = ResultSet::new(vec![record("tt2", "Q2 Movie")]);
        assert!(fsm.apply_outcome(t2, CycleOutcome::Enriched(set2.clone())));
        assert!(!fsm.apply_outcome(t1, CycleOutcome::NoMatches));
        assert_eq!(fsm.mode(), &UIMode::Populated(set2));

        // And the reverse arrival order.
        let mut fsm = SearchFsm::new();
        let (t1, _) = fsm.submit("q1").unwrap();
        let (t2, _) = fsm.submit("q2").unwrap();

        let set1 = ResultSet::new(vec![record("tt1", "Q1 Movie")]);
        assert!(!fsm.apply_outcome(t1, CycleOutcome::Enriched(set1)));
        assert_eq!(fsm.mode(), &UIMode::Searching);
        assert!(fsm.apply_outcome(t2, CycleOutcome::NoMatches));
        assert_eq!(fsm.mode(), &UIMode::Error(MSG_NO_MATCHES.into()));
    }

    #[test]
    fn entering_searching_clears_the_populated_surface() {
        let mut fsm = SearchFsm::new();
        let (token, _) = fsm.submit("q1").unwrap();
        let set = ResultSet::new(vec![record("tt1", "Q1 Movie")]);
        fsm.apply_outcome(token, CycleOutcome::Enriched(set));
        assert!(matches!(fsm.mode(), UIMode::Populated(_)));

        fsm.submit("q2").unwrap();
        assert_eq!(fsm.mode(), &UIMode::Searching);
    }

    #[test]
    fn background_animation_tracks_idle_and_error_only() {
        let mut fsm = SearchFsm::new();
        assert!(fsm.background_active());

        let (token, _) = fsm.submit("dune").unwrap();
        assert!(!fsm.background_active());

        fsm.apply_outcome(token, CycleOutcome::NoMatches);
        assert!(fsm.background_active());

        let (token, _) = fsm.submit("dune").unwrap();
        let set = ResultSet::new(vec![record("tt1", "Dune")]);
        fsm.apply_outcome(token, CycleOutcome::Enriched(set));
        assert!(!fsm.background_active());

        fsm.clear();
        assert!(fsm.background_active());
    }
}
