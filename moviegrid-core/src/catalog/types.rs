//! src/catalog/types.rs
//! ============================================================================
//! # Catalog Domain Types
//!
//! The typed units that flow through the search pipeline: a validated
//! `Query`, the ephemeral `MatchSummary` produced by the search endpoint,
//! the fully-enriched `DetailRecord`, and the ordered, immutable
//! `ResultSet` the renderer consumes. All wire sentinels ("N/A") are
//! resolved into typed variants here so nothing downstream compares raw
//! strings.

use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Sentinel the catalog uses for absent thumbnails and ratings.
pub const WIRE_UNAVAILABLE: &str = "N/A";

/// A trimmed, non-empty search string — the only valid input to a search.
///
/// Construction is the validation: empty and whitespace-only input never
/// produces a `Query`, so invalid queries cannot reach the catalog client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(CompactString);

impl Query {
    /// Trim and validate raw user input. Returns `None` for empty or
    /// whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(CompactString::new(trimmed)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque catalog-issued identifier (IMDb id on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub CompactString);

impl MovieId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Thumbnail reference, with the wire sentinel resolved at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Url(CompactString),
    Unavailable,
}

impl Thumbnail {
    /// Decode the wire value ("N/A" means unavailable).
    pub fn from_wire(raw: &str) -> Self {
        if raw == WIRE_UNAVAILABLE || raw.is_empty() {
            Self::Unavailable
        } else {
            Self::Url(CompactString::new(raw))
        }
    }

    /// Resolve to a renderable reference, substituting `placeholder` for
    /// the unavailable sentinel. The sentinel literal is never rendered.
    pub fn resolve<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Self::Url(url) => url,
            Self::Unavailable => placeholder,
        }
    }
}

/// Rating, numeric or unrated.
#[derive(Debug, Clone, PartialEq)]
pub enum Rating {
    Scored(f32),
    Unrated,
}

impl Rating {
    /// Decode the wire value ("N/A" or unparseable means unrated).
    pub fn from_wire(raw: &str) -> Self {
        raw.parse::<f32>().map_or(Self::Unrated, Self::Scored)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scored(score) => write!(f, "{score:.1}"),
            Self::Unrated => f.write_str("unrated"),
        }
    }
}

/// One search hit. Ephemeral: held only until enrichment completes, then
/// superseded by the corresponding `DetailRecord`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub id: MovieId,
    pub title: CompactString,
    pub year: CompactString,
    pub thumbnail: Thumbnail,
}

/// Fully-enriched record — the unit ultimately rendered as a card and in
/// the detail overlay. Superset of `MatchSummary`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRecord {
    pub id: MovieId,
    pub title: CompactString,
    pub year: CompactString,
    pub thumbnail: Thumbnail,
    pub rating: Rating,
    pub genre: CompactString,
    pub synopsis: String,
}

/// Ordered sequence of enriched records, preserving search-endpoint order.
///
/// Immutable once produced; each new search cycle replaces the set
/// wholesale, there is no incremental merge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet(Vec<DetailRecord>);

impl ResultSet {
    pub fn new(records: Vec<DetailRecord>) -> Self {
        Self(records)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DetailRecord> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DetailRecord> {
        self.0.iter()
    }

    /// Look an identifier up in this set (selection resolves against the
    /// current set only; ids from a superseded set simply miss).
    pub fn find(&self, id: &MovieId) -> Option<&DetailRecord> {
        self.0.iter().find(|record| &record.id == id)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a DetailRecord;
    type IntoIter = std::slice::Iter<'a, DetailRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_rejects_empty_and_whitespace() {
        assert_eq!(Query::parse(""), None);
        assert_eq!(Query::parse("   "), None);
        assert_eq!(Query::parse("\t\n"), None);
    }

    #[test]
    fn query_trims_surrounding_whitespace() {
        let q = Query::parse("  blade runner  ").unwrap();
        assert_eq!(q.as_str(), "blade runner");
    }

    #[test]
    fn thumbnail_sentinel_resolves_to_placeholder() {
        let thumb = Thumbnail::from_wire("N/A");
        assert_eq!(thumb, Thumbnail::Unavailable);
        assert_eq!(thumb.resolve("placeholder.png"), "placeholder.png");

        let real = Thumbnail::from_wire("https://example.com/p.jpg");
        assert_eq!(real.resolve("placeholder.png"), "https://example.com/p.jpg");
    }

    #[test]
    fn rating_sentinel_means_unrated() {
        assert_eq!(Rating::from_wire("N/A"), Rating::Unrated);
        assert_eq!(Rating::from_wire("8.8"), Rating::Scored(8.8));
        assert_eq!(Rating::from_wire("8.8").to_string(), "8.8");
        assert_eq!(Rating::from_wire("N/A").to_string(), "unrated");
    }

    #[test]
    fn result_set_find_misses_on_foreign_id() {
        let set = ResultSet::new(vec![]);
        assert!(set.find(&MovieId::new("tt0000001")).is_none());
    }
}
