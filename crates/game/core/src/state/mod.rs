//! Stored entity state.
//!
//! This module owns the records the host persists: entities, their base
//! attributes, inventory and health. Derived values are never stored here;
//! see [`crate::stats`].
mod attributes;
mod entity;
mod item;
mod patch;

pub use attributes::{AttributeKey, AttributeMap};
pub use entity::{Entity, EntityId, EntityKind, Health};
pub use item::{AttributeBonusSet, Item, ItemKind, sorted_for_display};
pub use patch::EntityPatch;
