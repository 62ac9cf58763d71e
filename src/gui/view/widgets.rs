//! Reusable small widgets used across view modules.

use std::path::Path;

use iced::widget::{image, row, slider, svg, text};
use iced::{Alignment, Element, Length};

use super::super::state::Message;
use super::super::util::is_svg;
use super::constants::{VOLUME_STEP, VOLUME_W};

/// Square icon; svg files go through the svg widget, anything else is raster.
pub(crate) fn icon(path: &Path, size: f32) -> Element<'static, Message> {
    if is_svg(path) {
        svg(svg::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    } else {
        image(image::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Volume slider. Emits only Messages (no rodio).
pub(crate) fn volume_bar(volume: f32) -> iced::widget::Row<'static, Message> {
    // slider requires value within bounds
    let vol = volume.clamp(0.0, 1.0);
    let vol_slider = slider(0.0..=1.0, vol, Message::VolumeChanged)
        .step(VOLUME_STEP)
        .width(Length::Fixed(VOLUME_W));

    row![text("Vol").size(12), vol_slider]
        .spacing(8)
        .align_y(Alignment::Center)
}
