//! src/tasks/search_cycle.rs
//! ============================================================================
//! # Search Cycle Task: Concurrent Enrichment Fan-Out
//!
//! Runs one full search cycle off the event loop: keyword search, then one
//! concurrent detail fetch per match with an explicit join point. The
//! aggregation rule is all-or-nothing — the first detail failure fails the
//! whole cycle and no partial result set is ever surfaced. The assembled
//! output preserves the search endpoint's order regardless of which fetch
//! completes first (records are correlated by position, not arrival time).
//!
//! The finished cycle reports back over the action channel tagged with its
//! token; the state machine decides whether it is still current.

use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, instrument};

use crate::catalog::client::Catalog;
use crate::catalog::types::{MatchSummary, Query, ResultSet};
use crate::controller::actions::Action;
use crate::controller::search_fsm::CycleToken;
use crate::error::CatalogError;

/// Terminal outcome of one search cycle.
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// Every match enriched, in search-endpoint order.
    Enriched(ResultSet),

    /// Well-formed empty result ("no movies found").
    NoMatches,

    /// Transport/parse failure anywhere in the cycle.
    Failed(CatalogError),
}

/// Fetch the full detail record for every summary concurrently.
///
/// All-or-nothing: any single failure fails the enrichment and partial
/// results are discarded. `try_join_all` is the join point; it yields the
/// outputs in input order, so completion order cannot reorder the set.
#[instrument(level = "debug", skip_all, fields(matches = summaries.len()))]
pub async fn enrich(
    catalog: &dyn Catalog,
    summaries: &[MatchSummary],
) -> Result<ResultSet, CatalogError> {
    let records = try_join_all(summaries.iter().map(|s| catalog.fetch_detail(&s.id))).await?;

    debug!(records = records.len(), "enrichment complete");
    Ok(ResultSet::new(records))
}

/// Run search → enrich and fold the result into a `CycleOutcome`.
pub async fn run_cycle(catalog: &dyn Catalog, query: &Query) -> CycleOutcome {
    let summaries = match catalog.search_by_keyword(query).await {
        Ok(summaries) => summaries,
        Err(CatalogError::NotFound) => return CycleOutcome::NoMatches,
        Err(e) => return CycleOutcome::Failed(e),
    };

    match enrich(catalog, &summaries).await {
        Ok(set) => CycleOutcome::Enriched(set),
        Err(e) => CycleOutcome::Failed(e),
    }
}

/// Spawn one search cycle as a background task.
///
/// The task always reports back, tagged with `token`; a stale cycle's
/// network calls run to completion and its outcome is discarded by the
/// state machine on token mismatch rather than aborted here.
pub fn spawn_search_cycle(
    catalog: Arc<dyn Catalog>,
    token: CycleToken,
    query: Query,
    action_tx: UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        let outcome = run_cycle(catalog.as_ref(), &query).await;
        // The receiver is gone only during shutdown.
        let _ = action_tx.send(Action::CycleFinished { token, outcome });
    });
}
