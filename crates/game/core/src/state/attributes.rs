//! The six character attributes and a fixed-shape map keyed by them.
//!
//! - **STR** (Strength): melee, lifting, breaking things
//! - **DEX** (Dexterity): reflexes, stealth, ranged attacks
//! - **CON** (Constitution): resilience, and the base of carrying capacity
//! - **INT** (Intelligence): knowledge, lore, reasoning
//! - **PSY** (Psyche): perception, willpower, resisting the uncanny
//! - **EGO** (Ego): presence, persuasion, leadership

use core::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::ChargenError;

/// Closed set of attribute identifiers.
///
/// Parses from and displays as the lowercase short name (`"str"`, `"dex"`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AttributeKey {
    Str,
    Dex,
    Con,
    Int,
    Psy,
    Ego,
}

impl AttributeKey {
    /// All keys in canonical order.
    pub const ALL: [AttributeKey; 6] = [
        AttributeKey::Str,
        AttributeKey::Dex,
        AttributeKey::Con,
        AttributeKey::Int,
        AttributeKey::Psy,
        AttributeKey::Ego,
    ];

    /// Parses a host-supplied key, reporting anything outside the closed set.
    pub fn parse(key: &str) -> Result<Self, ChargenError> {
        Self::from_str(key).map_err(|_| ChargenError::unknown_key(key))
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// One value per attribute.
///
/// Used for stored base values, aggregated bonuses and final modifiers alike,
/// so every layer shares the same shape and no key can go missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeMap<T> {
    pub str: T,
    pub dex: T,
    pub con: T,
    pub int: T,
    pub psy: T,
    pub ego: T,
}

impl<T> AttributeMap<T> {
    /// Builds a map by evaluating `f` once per key, in canonical order.
    pub fn from_fn(mut f: impl FnMut(AttributeKey) -> T) -> Self {
        Self {
            str: f(AttributeKey::Str),
            dex: f(AttributeKey::Dex),
            con: f(AttributeKey::Con),
            int: f(AttributeKey::Int),
            psy: f(AttributeKey::Psy),
            ego: f(AttributeKey::Ego),
        }
    }

    pub fn get(&self, key: AttributeKey) -> &T {
        match key {
            AttributeKey::Str => &self.str,
            AttributeKey::Dex => &self.dex,
            AttributeKey::Con => &self.con,
            AttributeKey::Int => &self.int,
            AttributeKey::Psy => &self.psy,
            AttributeKey::Ego => &self.ego,
        }
    }

    pub fn get_mut(&mut self, key: AttributeKey) -> &mut T {
        match key {
            AttributeKey::Str => &mut self.str,
            AttributeKey::Dex => &mut self.dex,
            AttributeKey::Con => &mut self.con,
            AttributeKey::Int => &mut self.int,
            AttributeKey::Psy => &mut self.psy,
            AttributeKey::Ego => &mut self.ego,
        }
    }

    /// Iterates `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &T)> {
        AttributeKey::iter().map(move |key| (key, self.get(key)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(AttributeKey, &T) -> U) -> AttributeMap<U> {
        AttributeMap::from_fn(|key| f(key, self.get(key)))
    }
}

impl AttributeMap<i32> {
    /// All six attributes set to the same value.
    pub fn splat(value: i32) -> Self {
        Self::from_fn(|_| value)
    }

    /// Creates a map in canonical order: str, dex, con, int, psy, ego.
    pub fn new(str: i32, dex: i32, con: i32, int: i32, psy: i32, ego: i32) -> Self {
        Self {
            str,
            dex,
            con,
            int,
            psy,
            ego,
        }
    }

    /// Largest value across the six attributes.
    pub fn max_value(&self) -> i32 {
        self.iter().map(|(_, v)| *v).max().unwrap_or_default()
    }
}

impl<T> core::ops::Index<AttributeKey> for AttributeMap<T> {
    type Output = T;

    fn index(&self, key: AttributeKey) -> &T {
        self.get(key)
    }
}

impl<T> core::ops::IndexMut<AttributeKey> for AttributeMap<T> {
    fn index_mut(&mut self, key: AttributeKey) -> &mut T {
        self.get_mut(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_short_names() {
        for key in AttributeKey::ALL {
            assert_eq!(AttributeKey::parse(key.as_str()), Ok(key));
        }
        assert_eq!(AttributeKey::Psy.to_string(), "psy");
    }

    #[test]
    fn parse_rejects_keys_outside_the_set() {
        assert_eq!(
            AttributeKey::parse("wis"),
            Err(ChargenError::unknown_key("wis"))
        );
    }

    #[test]
    fn iteration_follows_canonical_order() {
        let scores = AttributeMap::new(1, 2, 3, 4, 5, 6);
        let keys: Vec<_> = scores.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, AttributeKey::ALL.to_vec());
        assert_eq!(scores[AttributeKey::Con], 3);
        assert_eq!(scores.max_value(), 6);
    }
}
