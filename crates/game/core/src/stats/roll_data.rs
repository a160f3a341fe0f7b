//! Flat name → value context that dice formulas resolve against.
//!
//! Formulas refer to values by path, e.g. `1d20 + @str.mod`. Players expose
//! `<attr>.value`, `<attr>.mod`, `health.value` and `health.max`; creatures
//! expose `cr` and `xp`.

use std::collections::BTreeMap;

use crate::state::Entity;
use crate::stats::{DerivedView, derive};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RollData(BTreeMap<String, i64>);

impl RollData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the context for `entity` from its stored and derived values.
    pub fn for_entity(entity: &Entity) -> Self {
        let mut data = Self::new();
        match derive(entity) {
            DerivedView::Player(player) => {
                for (key, base) in entity.attributes.iter() {
                    data.insert(format!("{key}.value"), i64::from(*base));
                    data.insert(format!("{key}.mod"), i64::from(player.modifiers[key]));
                }
                data.insert("health.value", i64::from(entity.health.value));
                data.insert("health.max", i64::from(entity.health.max));
            }
            DerivedView::Creature(creature) => {
                data.insert("cr", i64::from(entity.challenge_rating));
                data.insert(
                    "xp",
                    i64::try_from(creature.experience).unwrap_or(i64::MAX),
                );
            }
            DerivedView::PassThrough => {}
        }
        data
    }

    pub fn insert(&mut self, path: impl Into<String>, value: i64) {
        self.0.insert(path.into(), value);
    }

    /// Looks up a path, with or without the leading `@`.
    pub fn get(&self, path: &str) -> Option<i64> {
        self.0.get(path.strip_prefix('@').unwrap_or(path)).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
