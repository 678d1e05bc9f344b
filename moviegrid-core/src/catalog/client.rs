//! src/catalog/client.rs
//! ============================================================================
//! # Catalog Client: Remote Search and Detail Lookups
//!
//! Issues the two remote requests (search-by-keyword, lookup-by-identifier)
//! and normalizes every transport, API and parse failure into the
//! `CatalogError` taxonomy. Nothing panics across this boundary and there
//! are no retries here — a single failure is terminal for the search cycle.
//!
//! The `Catalog` trait is the seam the orchestrator and state machine are
//! written against; `OmdbClient` is the production implementation.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::catalog::types::{DetailRecord, MatchSummary, MovieId, Query, Rating, Thumbnail};
use crate::config::CatalogConfig;
use crate::error::{AppError, CatalogError};

/// Wire marker for a success envelope.
const RESPONSE_TRUE: &str = "True";

/// The remote catalog, at its interface boundary.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Search by keyword. Zero matches (including the catalog's rejection
    /// envelopes) yields `CatalogError::NotFound`, distinct from transport
    /// failure.
    async fn search_by_keyword(&self, query: &Query) -> Result<Vec<MatchSummary>, CatalogError>;

    /// Fetch the full detail record for an identifier obtained from a prior
    /// search. No `NotFound` distinction here — the id is assumed valid.
    async fn fetch_detail(&self, id: &MovieId) -> Result<DetailRecord, CatalogError>;
}

/// Production client speaking the OMDb-style envelope format.
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::from_http(&e))?;

        let response = response
            .error_for_status()
            .map_err(|e| CatalogError::from_http(&e))?;

        response.json::<T>().await.map_err(|e| CatalogError::from_http(&e))
    }
}

#[async_trait]
impl Catalog for OmdbClient {
    #[instrument(level = "debug", skip(self), fields(query = query.as_str()))]
    async fn search_by_keyword(&self, query: &Query) -> Result<Vec<MatchSummary>, CatalogError> {
        let envelope: SearchEnvelope = self.get_envelope(&[("s", query.as_str())]).await?;
        let summaries = envelope.into_summaries()?;

        debug!(matches = summaries.len(), "search completed");
        Ok(summaries)
    }

    #[instrument(level = "debug", skip(self), fields(id = id.as_str()))]
    async fn fetch_detail(&self, id: &MovieId) -> Result<DetailRecord, CatalogError> {
        let envelope: DetailEnvelope = self.get_envelope(&[("i", id.as_str())]).await?;
        envelope.into_record()
    }
}

// ---------------------------------------------------------------------------
// Wire envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,

    #[serde(rename = "Search", default)]
    search: Vec<WireSummary>,

    #[serde(rename = "Error", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireSummary {
    #[serde(rename = "imdbID")]
    imdb_id: String,

    #[serde(rename = "Title")]
    title: String,

    #[serde(rename = "Year")]
    year: String,

    #[serde(rename = "Poster")]
    poster: String,
}

impl SearchEnvelope {
    /// Fold the failure envelope into the taxonomy. The catalog reports
    /// every search rejection ("Movie not found!", "Too many results.") in
    /// the same envelope shape, and all of them read as "nothing usable
    /// matched this keyword": they become `NotFound`. The raw reason is
    /// logged for diagnostics.
    fn into_summaries(self) -> Result<Vec<MatchSummary>, CatalogError> {
        if self.response != RESPONSE_TRUE {
            let reason = self.error.unwrap_or_else(|| "unspecified failure".to_string());
            warn!(%reason, "catalog rejected search");
            return Err(CatalogError::NotFound);
        }

        if self.search.is_empty() {
            // Success envelope with an empty match list. The catalog is not
            // supposed to produce this, but it reads as "no matches".
            return Err(CatalogError::NotFound);
        }

        Ok(self
            .search
            .into_iter()
            .map(|w| MatchSummary {
                id: MovieId::new(w.imdb_id),
                title: w.title.into(),
                year: w.year.into(),
                thumbnail: Thumbnail::from_wire(&w.poster),
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(rename = "Response")]
    response: String,

    #[serde(rename = "Error", default)]
    error: Option<String>,

    #[serde(rename = "imdbID", default)]
    imdb_id: Option<String>,

    #[serde(rename = "Title", default)]
    title: Option<String>,

    #[serde(rename = "Year", default)]
    year: Option<String>,

    #[serde(rename = "Poster", default)]
    poster: Option<String>,

    #[serde(rename = "imdbRating", default)]
    imdb_rating: Option<String>,

    #[serde(rename = "Genre", default)]
    genre: Option<String>,

    #[serde(rename = "Plot", default)]
    plot: Option<String>,
}

impl DetailEnvelope {
    fn into_record(self) -> Result<DetailRecord, CatalogError> {
        if self.response != RESPONSE_TRUE {
            let reason = self.error.unwrap_or_else(|| "unspecified failure".to_string());
            warn!(%reason, "catalog rejected detail lookup");
            return Err(CatalogError::Transport(reason));
        }

        let id = self
            .imdb_id
            .ok_or_else(|| CatalogError::Parse("detail envelope missing imdbID".to_string()))?;
        let title = self
            .title
            .ok_or_else(|| CatalogError::Parse("detail envelope missing Title".to_string()))?;

        Ok(DetailRecord {
            id: MovieId::new(id),
            title: title.into(),
            year: self.year.unwrap_or_default().into(),
            thumbnail: Thumbnail::from_wire(&self.poster.unwrap_or_default()),
            rating: Rating::from_wire(&self.imdb_rating.unwrap_or_default()),
            genre: self.genre.unwrap_or_default().into(),
            synopsis: self.plot.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_envelope_decodes_success() {
        let json = r#"{
            "Search": [
                {"Title": "Dune", "Year": "2021", "imdbID": "tt1160419", "Type": "movie", "Poster": "https://img/dune.jpg"},
                {"Title": "Dune", "Year": "1984", "imdbID": "tt0087182", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        let summaries = envelope.into_summaries().unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, MovieId::new("tt1160419"));
        assert_eq!(summaries[1].thumbnail, Thumbnail::Unavailable);
    }

    #[test]
    fn search_envelope_maps_no_matches_to_not_found() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_summaries(), Err(CatalogError::NotFound));
    }

    #[test]
    fn every_search_rejection_reads_as_not_found() {
        // The catalog rejects over-broad keywords the same way it rejects
        // unknown ones; both surface as the no-movies message.
        for reason in ["Too many results.", "Invalid API key!"] {
            let json = format!(r#"{{"Response": "False", "Error": "{reason}"}}"#);
            let envelope: SearchEnvelope = serde_json::from_str(&json).unwrap();
            assert_eq!(envelope.into_summaries(), Err(CatalogError::NotFound));
        }
    }

    #[test]
    fn detail_envelope_decodes_record_with_sentinels() {
        let json = r#"{
            "Title": "Dune", "Year": "1984", "Genre": "Adventure, Drama, Sci-Fi",
            "Plot": "A duke's son leads desert warriors.",
            "Poster": "N/A", "imdbRating": "N/A", "imdbID": "tt0087182",
            "Response": "True"
        }"#;

        let record: DetailRecord = serde_json::from_str::<DetailEnvelope>(json)
            .unwrap()
            .into_record()
            .unwrap();

        assert_eq!(record.id, MovieId::new("tt0087182"));
        assert_eq!(record.thumbnail, Thumbnail::Unavailable);
        assert_eq!(record.rating, Rating::Unrated);
        assert_eq!(record.genre, "Adventure, Drama, Sci-Fi");
    }

    #[test]
    fn detail_envelope_rejection_has_no_not_found_distinction() {
        let json = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        let envelope: DetailEnvelope = serde_json::from_str(json).unwrap();
        assert!(matches!(
            envelope.into_record(),
            Err(CatalogError::Transport(_))
        ));
    }

    #[test]
    fn detail_envelope_without_required_fields_is_a_parse_error() {
        let json = r#"{"Response": "True", "Title": "Dune"}"#;
        let envelope: DetailEnvelope = serde_json::from_str(json).unwrap();
        assert!(matches!(envelope.into_record(), Err(CatalogError::Parse(_))));
    }
}
