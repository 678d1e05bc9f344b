//! src/main.rs
//! Movie catalog search TUI: search bar, enriched result grid, detail overlay.

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{mpsc, Mutex};
use tracing::{error, info};

use moviegrid_core::{
    catalog::client::OmdbClient,
    config::Config,
    controller::{actions::Action, event_loop::EventLoop},
    model::app_state::AppState,
    Logger,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_handler();

    let _log_guard = Logger::init_tracing().context("Failed to initialize logging")?;
    info!("Starting moviegrid");

    let config = Arc::new(Config::load().await.unwrap_or_else(|e| {
        info!("Failed to load config, using defaults: {e}");
        Config::default()
    }));

    let catalog =
        Arc::new(OmdbClient::new(&config.catalog).context("Failed to build catalog client")?);

    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let app = Arc::new(Mutex::new(AppState::new(
        config,
        catalog,
        action_tx,
    )));

    let mut terminal = setup_terminal().context("Failed to initialize terminal")?;
    let mut event_loop = EventLoop::new(app, action_rx, tick_rate);

    let result = event_loop.run(&mut terminal).await;
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(e) = result {
        error!("Event loop failed: {e}");
        return Err(e.into());
    }

    info!("Application exited cleanly");
    Ok(())
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restore the terminal before the default panic output so a panic does
/// not leave the user's shell in raw mode.
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        error!("Panic: {panic_info}");
        default_hook(panic_info);
    }));
}
