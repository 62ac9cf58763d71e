//! Soundscape
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) that plays looping
//! ambient sounds. A row of buttons, one per catalog item: clicking one swaps
//! the window background to that item's picture and starts its loop; clicking
//! it again pauses (and shows the pause icon); clicking another switches over.
//!
//! # Shape
//! - `core` = catalog, config, asset checks, playback engine (no Iced imports)
//! - `gui`  = state, messages, update, view (no rodio imports)
//!
//! # Concurrency model
//! - All state changes happen in `update()` on the UI thread.
//! - rodio lives on its own thread and is driven by commands over a channel.
//! - Engine events come back through a polled receiver (`TickPlayback`).

mod core;
mod gui;
mod logging;

use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::gui::{Soundscape, subscription, update, view};

fn main() -> iced::Result {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = logging::init(&config) {
        eprintln!("Logging disabled: {e}");
    }

    if let Some(e) = config_error {
        log::error!("Could not load config, using defaults: {e}");
    }

    let catalog = match config.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Bad catalog, using built-in sounds: {e}");
            Catalog::builtin().resolve(&config.asset_root)
        }
    };

    log::info!("{} sounds in catalog", catalog.len());

    iced::application(move || Soundscape::new(&config, catalog.clone()), update, view)
        .title("Soundscape")
        .subscription(subscription)
        .run()
}
