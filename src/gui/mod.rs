//! Window side of Soundscape.
//!
//! `Soundscape` owns the selector row and the playback controller. Every
//! click and slider move arrives as a `Message`, goes through `update`, and
//! is redrawn by `view`. Engine events are picked up on a timer tick.

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

pub(crate) use state::Soundscape;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
