pub mod error;

pub mod config;

pub mod catalog {
    pub mod client;
    pub use client::{Catalog, OmdbClient};

    pub mod types;
    pub use types::{DetailRecord, MatchSummary, MovieId, Query, Rating, ResultSet, Thumbnail};
}

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod search_fsm;
    pub use search_fsm::{CycleToken, SearchFsm};

    pub mod overlay;
    pub use overlay::OverlayController;

    pub mod event_loop;
    pub use event_loop::EventLoop;
}

pub mod model {
    pub mod app_state;
    pub use app_state::AppState;

    pub mod ui_state;
    pub use ui_state::{Focus, OverlayState, UIMode, UIState};
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod background;
        pub use background::Background;
        pub mod detail_overlay;
        pub use detail_overlay::DetailOverlay;
        pub mod result_grid;
        pub use result_grid::ResultGrid;
        pub mod search_bar;
        pub use search_bar::SearchBar;
        pub mod status_line;
        pub use status_line::StatusLine;
    }

    pub use components::*;
}

pub mod tasks {
    pub mod search_cycle;
    pub use search_cycle::{enrich, spawn_search_cycle, CycleOutcome};
}

pub mod logging;
pub use logging::Logger;

#[cfg(test)]
pub mod test_support;

pub use error::{AppError, CatalogError};

pub use model::{app_state::AppState, ui_state::UIState};
