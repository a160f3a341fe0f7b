//! Partial entity updates.
//!
//! The persistence collaborator applies an [`EntityPatch`] as one write, so a
//! rolled value and the flag it clears land together or not at all.

use std::collections::BTreeMap;

use crate::chargen::GenerationFlags;
use crate::state::{AttributeKey, Entity, Health, Item};

/// Fields to change on an entity. Fields left unset are not touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityPatch {
    /// Only the listed attributes are overwritten.
    pub attributes: BTreeMap<AttributeKey, i32>,
    pub health: Option<Health>,
    /// Replaces the whole flag record.
    pub generation: Option<GenerationFlags>,
    /// Appended to the inventory in order.
    pub add_items: Vec<Item>,
}

impl EntityPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, key: AttributeKey, value: i32) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn health(mut self, health: Health) -> Self {
        self.health = Some(health);
        self
    }

    pub fn generation(mut self, generation: GenerationFlags) -> Self {
        self.generation = Some(generation);
        self
    }

    pub fn add_item(mut self, item: Item) -> Self {
        self.add_items.push(item);
        self
    }

    /// Applies the patch in place.
    pub fn apply_to(&self, entity: &mut Entity) {
        for (key, value) in &self.attributes {
            entity.attributes[*key] = *value;
        }
        if let Some(health) = self.health {
            entity.health = health;
        }
        if let Some(generation) = &self.generation {
            entity.generation = Some(generation.clone());
        }
        entity.inventory.extend(self.add_items.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AttributeMap;

    #[test]
    fn unset_fields_are_left_alone() {
        let mut entity = Entity::new_player("pc-1", "Ysolde")
            .with_attributes(AttributeMap::new(1, 2, 3, 4, 5, 6))
            .with_item(Item::gear("Rope", 1));
        let before = entity.clone();

        EntityPatch::new()
            .attribute(AttributeKey::Dex, 9)
            .apply_to(&mut entity);

        assert_eq!(entity.attributes, AttributeMap::new(1, 9, 3, 4, 5, 6));
        assert_eq!(entity.inventory, before.inventory);
        assert_eq!(entity.generation, before.generation);
        assert_eq!(entity.health, before.health);
    }

    #[test]
    fn items_are_appended() {
        let mut entity = Entity::new_player("pc-1", "Ysolde").with_item(Item::gear("Rope", 1));
        EntityPatch::new()
            .add_item(Item::weapon("Spear", 2))
            .apply_to(&mut entity);
        let names: Vec<_> = entity.inventory.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Rope", "Spear"]);
    }
}
