//! One selector: the item's image as the face, current icon centred on top.

use iced::widget::{button, container, image, stack};
use iced::{ContentFit, Element, Length};

use super::super::state::{Message, Selector};
use super::constants::{ICON_SIZE, SELECTOR_SIZE};
use super::widgets::icon;
use crate::core::types::ItemId;

/// `on_click` is called with the selector's id when it is pressed.
pub(crate) fn selector_button<'a>(
    selector: &'a Selector,
    on_click: impl Fn(ItemId) -> Message,
) -> Element<'a, Message> {
    let face = image(image::Handle::from_path(&selector.item.background))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill);

    let badge = container(icon(selector.displayed_icon(), ICON_SIZE))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    button(stack![face, badge])
        .on_press(on_click(selector.id()))
        .padding(0)
        .width(Length::Fixed(SELECTOR_SIZE))
        .height(Length::Fixed(SELECTOR_SIZE))
        .into()
}
