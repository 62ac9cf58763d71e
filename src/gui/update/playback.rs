//! gui/update/playback.rs
//! GUI-playback engine bridge: volume changes and engine events.

use iced::Task;

use super::super::state::{Message, Soundscape};
use crate::core::playback::PlayerEvent;

pub(crate) fn set_volume(state: &mut Soundscape, volume: f32) -> Task<Message> {
    // Applies whether or not anything is playing.
    state.player.set_volume(volume);
    state.volume = state.player.volume();

    Task::none()
}

pub(crate) fn drain_events(state: &mut Soundscape) -> Task<Message> {
    let Some(rx) = state.playback_events.as_ref() else {
        return Task::none();
    };

    let drained: Vec<PlayerEvent> = rx.try_iter().collect();

    for ev in drained {
        handle_event(state, ev);
    }

    Task::none()
}

fn handle_event(state: &mut Soundscape, event: PlayerEvent) {
    match event {
        PlayerEvent::Loaded { path } => {
            log::debug!("loaded {}", path.display());
        }
        PlayerEvent::Error(err) => {
            log::warn!("playback: {err}");
            state.status = format!("Playback error: {err}");
        }
    }
}
