//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs are plain data
//! - No GUI code
//! - No audio code
//!
//! 'CatalogItem' is ONE selectable ambient sound plus the imagery shown for it.

use std::path::PathBuf;

use serde::Deserialize;

/// Stable identifier of a catalog item (small, unique within a catalog).
pub type ItemId = u32;

/// One entry of the catalog.
///
/// Paths are relative to the asset root until `Catalog::resolve` joins them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,

    /// Looping audio track.
    pub sound: PathBuf,

    /// Image used for the selector face and the window background.
    #[serde(alias = "bg")]
    pub background: PathBuf,

    /// Icon shown while the item is not paused.
    pub icon: PathBuf,
}

impl CatalogItem {
    pub fn new(
        id: ItemId,
        sound: impl Into<PathBuf>,
        background: impl Into<PathBuf>,
        icon: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id,
            sound: sound.into(),
            background: background.into(),
            icon: icon.into(),
        }
    }
}
