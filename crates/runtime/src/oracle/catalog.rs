//! [`ItemCatalog`] backed by an in-memory name map.
use std::collections::HashMap;

use rustrim_core::Item;

use crate::api::ItemCatalog;

/// Item catalog with static item definitions, keyed by exact name.
#[derive(Debug, Clone, Default)]
pub struct CatalogImpl {
    items: HashMap<String, Item>,
}

impl CatalogImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from loaded items. Later duplicates replace earlier
    /// ones.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut catalog = Self::new();
        for item in items {
            catalog.add_item(item);
        }
        catalog
    }

    /// Add an item definition
    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.name.clone(), item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for CatalogImpl {
    fn find_by_name(&self, name: &str) -> Option<Item> {
        self.items.get(name).cloned()
    }
}
