//! core/catalog.rs
//! The fixed, ordered list of selectable ambient sounds.

use std::collections::HashSet;
use std::path::Path;

use super::error::{Result, SoundscapeError};
use super::types::{CatalogItem, ItemId};

/// Validated catalog: non-empty, unique ids, declaration order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(SoundscapeError::EmptyCatalog);
        }

        let mut seen: HashSet<ItemId> = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(SoundscapeError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    /// Sample configuration: summer, rain, winter.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Linear scan; catalogs are a handful of entries.
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Join relative asset paths onto `root`. Absolute paths are kept.
    pub fn resolve(self, root: &Path) -> Self {
        let items = self
            .items
            .into_iter()
            .map(|item| CatalogItem {
                id: item.id,
                sound: root.join(item.sound),
                background: root.join(item.background),
                icon: root.join(item.icon),
            })
            .collect();

        Self { items }
    }
}

pub(crate) fn builtin_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(1, "sounds/summer.mp3", "bg/summer-bg.jpg", "icons/sun.svg"),
        CatalogItem::new(2, "sounds/rain.mp3", "bg/rainy-bg.jpg", "icons/cloud-rain.svg"),
        CatalogItem::new(3, "sounds/winter.mp3", "bg/winter-bg.jpg", "icons/cloud-snow.svg"),
    ]
}
