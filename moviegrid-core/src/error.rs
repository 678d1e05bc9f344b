//! src/error.rs
//! ============================================================================
//! # Unified Error Types
//!
//! Defines the two error enums used across the application: `CatalogError`,
//! the failure taxonomy spoken by the remote catalog client and the
//! enrichment pipeline, and `AppError`, the unified type for everything
//! else (terminal, config, shell). All major modules use `Result<T, _>`
//! with one of these for consistency.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Failure taxonomy of the remote catalog.
///
/// The client converts every failure into one of these variants before it
/// crosses the client boundary; nothing panics past it. `NotFound` is only
/// produced by the search endpoint (a well-formed empty-result response) so
/// the state machine can render a dedicated message instead of a generic
/// error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Network / DNS / timeout-class failure, including non-success HTTP
    /// statuses and API-level rejection envelopes.
    #[error("catalog transport failure: {0}")]
    Transport(String),

    /// Well-formed response carrying zero matches.
    #[error("no matches in catalog")]
    NotFound,

    /// Malformed or incomplete response envelope.
    #[error("malformed catalog response: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Map a `reqwest` failure onto the taxonomy: body-decode failures are
    /// `Parse`, everything else is `Transport`.
    pub fn from_http(e: &reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Unified error type for the application shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Remote catalog failure.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serialization or deserialization error (e.g., JSON).
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// HTTP client construction failure.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal<S: Into<String>>(message: S) -> Self {
        Self::Terminal(message.into())
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
