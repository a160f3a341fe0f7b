//! Item catalog loader.
//!
//! Catalog files use the host's flat record shape (a `kind` string plus
//! optional bonuses) rather than the core enum layout. Records are validated
//! here: bonus keys must name one of the six attributes, and only passive
//! effects may carry bonuses.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, bail};
use rustrim_core::{AttributeBonusSet, AttributeKey, Item, ItemKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One catalog entry as written in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    /// `armor`, `weapon`, `gear` (or `item`), `passiveEffect` (or `effect`).
    /// Anything else is kept as an uncounted kind.
    pub kind: String,
    #[serde(default)]
    pub slots: i32,
    #[serde(default)]
    pub bonuses: BTreeMap<String, i32>,
}

impl ItemRecord {
    /// Converts the record into a core item.
    ///
    /// # Errors
    ///
    /// Fails on an unknown attribute key, or on bonuses attached to a kind
    /// other than a passive effect.
    pub fn into_item(self) -> LoadResult<Item> {
        let kind = match self.kind.as_str() {
            "armor" => ItemKind::Armor,
            "weapon" => ItemKind::Weapon,
            "gear" | "item" => ItemKind::Gear,
            "passiveEffect" | "effect" => ItemKind::PassiveEffect {
                bonuses: parse_bonuses(&self.name, &self.bonuses)?,
            },
            other => ItemKind::Other(other.to_string()),
        };
        if kind.bonuses().is_none() && !self.bonuses.is_empty() {
            bail!(
                "item '{}' of kind '{}' cannot carry attribute bonuses",
                self.name,
                self.kind
            );
        }
        Ok(Item::new(self.name, kind, self.slots))
    }
}

fn parse_bonuses(item: &str, raw: &BTreeMap<String, i32>) -> LoadResult<AttributeBonusSet> {
    raw.iter()
        .map(|(key, delta)| {
            AttributeKey::parse(key)
                .map(|key| (key, *delta))
                .with_context(|| format!("item '{item}' has a bonus for unknown attribute"))
        })
        .collect()
}

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemRecord>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an [`ItemCatalogFile`]
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse catalog RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        catalog.items.into_iter().map(ItemRecord::into_item).collect()
    }
}
