//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod selector;
mod widgets;

use iced::widget::{Row, column, container, image, stack, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::state::{Message, Soundscape};
use constants::{SELECTOR_SPACING, STATUS_TEXT};

pub(crate) fn view(state: &Soundscape) -> Element<'_, Message> {
    let selectors = Row::with_children(
        state
            .selectors
            .iter()
            .map(|s| selector::selector_button(s, Message::SelectorClicked)),
    )
    .spacing(SELECTOR_SPACING);

    let controls = column![
        selectors,
        widgets::volume_bar(state.volume),
        text(state.status.as_str()).size(STATUS_TEXT),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    let content = container(controls)
        .padding(24)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    match &state.background {
        Some(path) => stack![
            image(image::Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill),
            content,
        ]
        .into(),
        None => content.into(),
    }
}
