//! core/mod.rs
//!
//! Everything below the window:
//! - catalog of ambient sounds + config file
//! - startup asset checks
//! - the single playback channel (rodio, own thread)
//!
//! No Iced imports here; the GUI calls in and renders plain data.

pub mod catalog;
pub mod config;
pub mod error;
pub mod playback;
pub mod probe;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
