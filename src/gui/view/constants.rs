//! View constants (layout/sizing).

pub(crate) const SELECTOR_SIZE: f32 = 120.0;
pub(crate) const SELECTOR_SPACING: f32 = 24.0;
pub(crate) const ICON_SIZE: f32 = 40.0;

pub(crate) const VOLUME_W: f32 = 240.0;
pub(crate) const VOLUME_STEP: f32 = 0.01;

pub(crate) const STATUS_TEXT: f32 = 14.0;
