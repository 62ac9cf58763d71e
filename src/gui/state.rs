//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::core::playback::{PlaybackController, PlayerEvent, start_playback};
use crate::core::probe::{check_catalog, issue_path};
use crate::core::types::{CatalogItem, ItemId};

use super::util::filename_stem;

/// Which icon a selector currently draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconState {
    Initial,
    Paused,
}

/// One on-screen control for a catalog item.
/// Only the icon ever changes after construction.
#[derive(Debug, Clone)]
pub(crate) struct Selector {
    pub item: CatalogItem,
    pub paused_icon: PathBuf,
    pub icon: IconState,
}

impl Selector {
    pub fn new(item: CatalogItem, paused_icon: PathBuf) -> Self {
        Self {
            item,
            paused_icon,
            icon: IconState::Initial,
        }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    pub fn show_initial_icon(&mut self) {
        self.icon = IconState::Initial;
    }

    pub fn show_paused_icon(&mut self) {
        self.icon = IconState::Paused;
    }

    pub fn displayed_icon(&self) -> &Path {
        match self.icon {
            IconState::Initial => &self.item.icon,
            IconState::Paused => &self.paused_icon,
        }
    }
}

/// App state (the coordinator).
pub(crate) struct Soundscape {
    pub status: String,

    // Selectors, in catalog order
    pub selectors: Vec<Selector>,

    // Playback
    pub player: PlaybackController,
    pub playback_events: Option<Receiver<PlayerEvent>>,
    pub volume: f32,

    // Window background; None until the first click
    pub background: Option<PathBuf>,
}

impl Soundscape {
    /// Boot: build selectors, check assets, start the engine.
    pub fn new(config: &Config, catalog: Catalog) -> Self {
        let paused_icon = config.paused_icon_path();

        let issues = check_catalog(&catalog, &paused_icon);
        for issue in &issues {
            match (issue.id, issue_path(issue)) {
                (Some(id), _) => {
                    let label = catalog
                        .get(id)
                        .map(|item| filename_stem(&item.sound))
                        .unwrap_or_default();
                    log::warn!("item {id} ({label}): {}", issue.error)
                }
                (None, Some(path)) => log::warn!("shared asset {}: {}", path.display(), issue.error),
                (None, None) => log::warn!("{}", issue.error),
            }
        }

        let volume = config.volume();
        let (player, events) = start_playback(volume);

        let mut state = Self::with_player(&catalog, paused_icon, player, Some(events));
        if !issues.is_empty() {
            state.status = format!("{} asset problem(s), see log.", issues.len());
        }
        state
    }

    pub fn with_player(
        catalog: &Catalog,
        paused_icon: PathBuf,
        player: PlaybackController,
        playback_events: Option<Receiver<PlayerEvent>>,
    ) -> Self {
        let selectors = catalog
            .items()
            .iter()
            .cloned()
            .map(|item| Selector::new(item, paused_icon.clone()))
            .collect();

        Self {
            status: "Pick a sound.".to_string(),
            selectors,
            volume: player.volume(),
            player,
            playback_events,
            background: None,
        }
    }

    pub fn selector_index(&self, id: ItemId) -> Option<usize> {
        self.selectors.iter().position(|s| s.id() == id)
    }

    pub fn selector_mut(&mut self, id: ItemId) -> Option<&mut Selector> {
        self.selectors.iter_mut().find(|s| s.id() == id)
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    SelectorClicked(ItemId),
    VolumeChanged(f32),
    TickPlayback,
}
