//! Entity records as the rules see them.

use crate::chargen::GenerationFlags;
use crate::state::{AttributeKey, AttributeMap, Item};

/// Opaque identifier assigned by the persistence layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Entity discriminator.
///
/// Unknown discriminators are preserved in [`EntityKind::Other`]; the rules
/// pass such entities through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityKind {
    #[cfg_attr(feature = "serde", serde(alias = "character"))]
    Player,
    #[cfg_attr(feature = "serde", serde(alias = "npc"))]
    Creature,
    #[cfg_attr(feature = "serde", serde(untagged))]
    Other(String),
}

/// Current and maximum health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub value: i32,
    pub max: i32,
}

impl Health {
    /// Full health at the given maximum.
    pub const fn full(max: i32) -> Self {
        Self { value: max, max }
    }
}

/// A player character or creature.
///
/// Only stored fields live here. Modifiers, encumbrance and experience are
/// always recomputed by [`crate::stats::derive`] and never written back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub kind: EntityKind,
    /// Base attribute values.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: AttributeMap<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub health: Health,
    /// Creature difficulty; ignored for players.
    #[cfg_attr(feature = "serde", serde(default))]
    pub challenge_rating: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<Item>,
    /// Character-generation progress; players only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub generation: Option<GenerationFlags>,
}

impl Entity {
    /// A fresh player character with every generation step pending.
    pub fn new_player(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntityKind::Player,
            attributes: AttributeMap::default(),
            health: Health::default(),
            challenge_rating: 0,
            inventory: Vec::new(),
            generation: Some(GenerationFlags::new_pending()),
        }
    }

    pub fn new_creature(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        challenge_rating: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntityKind::Creature,
            attributes: AttributeMap::default(),
            health: Health::default(),
            challenge_rating,
            inventory: Vec::new(),
            generation: None,
        }
    }

    pub fn with_attributes(mut self, attributes: AttributeMap<i32>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.inventory.push(item);
        self
    }

    pub fn with_generation(mut self, generation: Option<GenerationFlags>) -> Self {
        self.generation = generation;
        self
    }

    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }

    pub fn base_value(&self, key: AttributeKey) -> i32 {
        self.attributes[key]
    }
}
