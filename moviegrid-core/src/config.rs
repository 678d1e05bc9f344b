//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages user-editable settings: the remote catalog endpoint, the
//! placeholder thumbnail reference and UI pacing. Loads and saves settings
//! as TOML from the proper cross-platform config path using the
//! [`directories`](https://docs.rs/directories) crate.
//!
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting if no config file exists
//! - Async load/save for smooth integration with Tokio

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use tokio::fs as TokioFs;

/// Remote catalog endpoint settings.
///
/// Both the search-by-keyword and lookup-by-identifier requests go to the
/// same base URL with different query parameters (OMDb convention).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the catalog service.
    pub base_url: String,

    /// API key appended to every request.
    pub api_key: String,

    /// Transport-level request timeout.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: "f5c2fc99".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Substituted wherever the catalog reports a thumbnail as unavailable.
    pub placeholder_thumb: String,

    /// Milliseconds between animation ticks.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder_thumb: "https://via.placeholder.com/300x450?text=No+Image".to_string(),
            tick_rate_ms: 120,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads config from TOML file at the XDG-compliant app config dir, or
    /// returns defaults (writing them out for the user to edit).
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/moviegrid/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(&path).await?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Saves config to TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;

        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(&path, toml_str).await?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "moviegrid", "moviegrid")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Returns the log directory under the platform data dir.
    pub fn log_dir() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "moviegrid", "moviegrid")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory."))?;
        Ok(proj_dirs.data_dir().join("logs"))
    }
}
