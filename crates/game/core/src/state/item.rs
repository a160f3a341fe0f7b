//! Inventory items.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the fields every item has (name, slot cost)
//! - [`ItemKind`] holds the kind and any kind-specific data; only passive
//!   effects carry attribute bonuses

use std::collections::BTreeMap;

use crate::state::AttributeKey;

/// Signed attribute deltas granted by a passive effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttributeBonusSet(BTreeMap<AttributeKey, i32>);

impl AttributeBonusSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` to the entry for `key` (builder pattern).
    pub fn with(mut self, key: AttributeKey, delta: i32) -> Self {
        *self.0.entry(key).or_default() += delta;
        self
    }

    pub fn get(&self, key: AttributeKey) -> i32 {
        self.0.get(&key).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, i32)> + '_ {
        self.0.iter().map(|(key, delta)| (*key, *delta))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AttributeKey, i32)> for AttributeBonusSet {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, i32)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, (key, delta)| set.with(key, delta))
    }
}

/// Item kind with kind-specific data.
///
/// Hosts may store kinds this crate does not know about; those are kept
/// verbatim in [`ItemKind::Other`] and never count toward slots or bonuses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ItemKind {
    Armor,
    Weapon,
    /// General equipment (`item` in the host's vocabulary).
    #[cfg_attr(feature = "serde", serde(alias = "item"))]
    Gear,
    /// Always-on effect (`effect` in the host's vocabulary).
    #[cfg_attr(feature = "serde", serde(alias = "effect"))]
    PassiveEffect { bonuses: AttributeBonusSet },
    #[cfg_attr(feature = "serde", serde(untagged))]
    Other(String),
}

impl ItemKind {
    /// Whether items of this kind occupy inventory slots.
    pub fn counts_toward_slots(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Attribute bonuses granted by this kind, if any.
    pub fn bonuses(&self) -> Option<&AttributeBonusSet> {
        match self {
            Self::PassiveEffect { bonuses } => Some(bonuses),
            _ => None,
        }
    }

    /// Sort rank used when listing an inventory: effects first, then
    /// armor, weapons and gear; unknown kinds last.
    pub fn display_rank(&self) -> u8 {
        match self {
            Self::PassiveEffect { .. } => 0,
            Self::Armor => 1,
            Self::Weapon => 2,
            Self::Gear => 3,
            Self::Other(_) => u8::MAX,
        }
    }
}

/// A single inventory entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Catalog name; also the text roll tables resolve to.
    pub name: String,
    pub kind: ItemKind,
    /// Inventory slots occupied. Negative values are accepted and simply
    /// reduce the total.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot_cost: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, slot_cost: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            slot_cost,
        }
    }

    pub fn armor(name: impl Into<String>, slot_cost: i32) -> Self {
        Self::new(name, ItemKind::Armor, slot_cost)
    }

    pub fn weapon(name: impl Into<String>, slot_cost: i32) -> Self {
        Self::new(name, ItemKind::Weapon, slot_cost)
    }

    pub fn gear(name: impl Into<String>, slot_cost: i32) -> Self {
        Self::new(name, ItemKind::Gear, slot_cost)
    }

    pub fn passive_effect(
        name: impl Into<String>,
        slot_cost: i32,
        bonuses: AttributeBonusSet,
    ) -> Self {
        Self::new(name, ItemKind::PassiveEffect { bonuses }, slot_cost)
    }
}

/// Returns the inventory ordered for display (stable within a rank).
pub fn sorted_for_display(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by_key(|item| item.kind.display_rank());
    sorted
}
