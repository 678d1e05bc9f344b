//! src/logging.rs
//! ============================================================================
//! # Logger: Tracing Initialization
//!
//! File-backed structured logging. Raw technical error detail (transport
//! failures, malformed envelopes) lands here for diagnostics and is never
//! rendered to the user-facing surface — the UI only ever shows the fixed,
//! non-technical messages owned by the search state machine.
//!
//! Logs go to a daily-rolling file under the platform data dir because the
//! terminal itself is owned by the TUI while the app runs.

use std::path::PathBuf;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

const LOG_FILE_PREFIX: &str = "moviegrid.log";
const DEFAULT_DIRECTIVES: &str = "moviegrid_core=info";

pub struct Logger;

impl Logger {
    /// Install the global tracing subscriber.
    ///
    /// Returns the appender guard; the caller must hold it for the process
    /// lifetime or buffered log lines are dropped on exit. Filtering honors
    /// `RUST_LOG` with a sensible default.
    pub fn init_tracing() -> anyhow::Result<WorkerGuard> {
        let log_dir: PathBuf = Config::log_dir()?;
        std::fs::create_dir_all(&log_dir)?;

        let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true),
            )
            .init();

        tracing::info!("Tracing initialized");
        Ok(guard)
    }
}
