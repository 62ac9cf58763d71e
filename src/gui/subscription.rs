//! Timer that drains the playback engine's event receiver.
//! Silent when the app was built without an engine (tests).

use iced::{Subscription, time};
use std::time::Duration;

use super::state::{Message, Soundscape};

const EVENT_POLL: Duration = Duration::from_millis(250);

pub(crate) fn subscription(state: &Soundscape) -> Subscription<Message> {
    match state.playback_events {
        Some(_) => time::every(EVENT_POLL).map(|_| Message::TickPlayback),
        None => Subscription::none(),
    }
}
