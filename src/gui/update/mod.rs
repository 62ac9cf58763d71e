//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Soundscape};

mod playback;
mod selector;

pub(crate) fn update(state: &mut Soundscape, message: Message) -> Task<Message> {
    match message {
        Message::SelectorClicked(id) => selector::selector_clicked(state, id),
        Message::VolumeChanged(volume) => playback::set_volume(state, volume),
        Message::TickPlayback => playback::drain_events(state),
    }
}
