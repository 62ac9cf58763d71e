//! gui/update/selector.rs
//! Click handling: toggle the bound item or rebind the channel.
//!
//! - Same item clicked: pause <-> play, paused icon only while paused.
//! - Other item clicked: reset the old selector's icon, bind + play the new one.
//! - The window background always follows the clicked item.

use iced::Task;

use super::super::state::{Message, Soundscape};
use super::super::util::filename_stem;
use crate::core::playback::PlaybackState;
use crate::core::types::ItemId;

pub(crate) fn selector_clicked(state: &mut Soundscape, id: ItemId) -> Task<Message> {
    let Some(index) = state.selector_index(id) else {
        log::warn!("click on unknown item {id} ignored");
        return Task::none();
    };

    let item = state.selectors[index].item.clone();
    state.background = Some(item.background.clone());

    let label = filename_stem(&item.sound);

    match state.player.state() {
        PlaybackState::Bound { id: bound, .. } if bound == id => {
            if state.player.is_active() {
                state.player.pause();
                state.selectors[index].show_paused_icon();
                state.status = format!("Paused {label}");
            } else {
                resume(state, &label);
                state.selectors[index].show_initial_icon();
            }
        }
        PlaybackState::Bound { .. } | PlaybackState::Unbound => {
            // Reset unconditionally; the old selector may show either icon.
            if let Some(previous) = state.player.bound_id()
                && let Some(selector) = state.selector_mut(previous)
            {
                selector.show_initial_icon();
            }

            state.player.bind(id, item.sound);
            resume(state, &label);
        }
    }

    Task::none()
}

fn resume(state: &mut Soundscape, label: &str) {
    match state.player.play() {
        Ok(()) => state.status = format!("Playing {label}"),
        Err(e) => {
            log::warn!("play failed: {e}");
            state.status = e.to_string();
        }
    }
}
