//! src/test_support.rs
//! ============================================================================
//! # Test Support: Stub Catalog and Fixture Builders
//!
//! An in-memory `Catalog` implementation with scriptable per-id delays and
//! failures, used to exercise the enrichment fan-out and the state machine
//! without a network.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::client::Catalog;
use crate::catalog::types::{
    DetailRecord, MatchSummary, MovieId, Query, Rating, ResultSet, Thumbnail,
};
use crate::error::CatalogError;

/// A minimal summary fixture.
pub fn summary(id: &str) -> MatchSummary {
    MatchSummary {
        id: MovieId::new(id),
        title: format!("Summary {id}").into(),
        year: "2021".into(),
        thumbnail: Thumbnail::Unavailable,
    }
}

/// A minimal detail fixture. Thumbnail is deliberately the unavailable
/// sentinel so renderer tests can assert placeholder substitution.
pub fn record(id: &str, title: &str) -> DetailRecord {
    DetailRecord {
        id: MovieId::new(id),
        title: title.into(),
        year: "2021".into(),
        thumbnail: Thumbnail::Unavailable,
        rating: Rating::Scored(7.5),
        genre: "Sci-Fi".into(),
        synopsis: "A test synopsis.".to_string(),
    }
}

pub fn result_set(records: &[(&str, &str)]) -> ResultSet {
    ResultSet::new(records.iter().map(|(id, title)| record(id, title)).collect())
}

/// Scriptable in-memory catalog.
#[derive(Default)]
pub struct StubCatalog {
    searches: HashMap<String, Vec<MatchSummary>>,
    details: HashMap<MovieId, (DetailRecord, Duration)>,
    failures: HashMap<MovieId, CatalogError>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, summaries: Vec<MatchSummary>) -> Self {
        self.searches.insert(query.to_string(), summaries);
        self
    }

    pub fn with_detail(mut self, id: &str, title: &str, delay: Duration) -> Self {
        self.details.insert(MovieId::new(id), (record(id, title), delay));
        self
    }

    pub fn with_failing_detail(mut self, id: &str, error: CatalogError) -> Self {
        self.failures.insert(MovieId::new(id), error);
        self
    }
}

#[async_trait]
impl Catalog for StubCatalog {
    async fn search_by_keyword(&self, query: &Query) -> Result<Vec<MatchSummary>, CatalogError> {
        self.searches
            .get(query.as_str())
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn fetch_detail(&self, id: &MovieId) -> Result<DetailRecord, CatalogError> {
        if let Some(error) = self.failures.get(id) {
            return Err(error.clone());
        }

        let (record, delay) = self
            .details
            .get(id)
            .ok_or_else(|| CatalogError::Transport(format!("unknown id {id}")))?;

        if !delay.is_zero() {
            tokio::time::sleep(*delay).await;
        }
        Ok(record.clone())
    }
}
