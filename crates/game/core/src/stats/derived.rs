//! Derived view of an entity.
//!
//! Everything here is recomputed from stored state on every pass and is
//! never written back:
//! - players: per-attribute modifiers and encumbrance
//! - creatures: experience value
//! - anything else: passed through with nothing derived

use crate::config::RulesConfig;
use crate::state::{AttributeKey, AttributeMap, Entity, EntityKind};
use crate::stats::{ItemBonuses, compute_bonuses};

/// Slot capacity against slot usage.
///
/// `used` may exceed `capacity`; that is an overload the caller can show,
/// not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encumbrance {
    pub capacity: i32,
    pub used: i32,
}

impl Encumbrance {
    /// Capacity is `10 + CON` (base value, before bonuses).
    pub fn compute(attributes: &AttributeMap<i32>, bonuses: &ItemBonuses) -> Self {
        Self {
            capacity: RulesConfig::BASE_SLOT_CAPACITY
                .saturating_add(attributes[AttributeKey::Con]),
            used: bonuses.slot_total,
        }
    }

    pub fn is_overloaded(&self) -> bool {
        self.used > self.capacity
    }

    /// Remaining slots; negative when overloaded.
    pub fn free_slots(&self) -> i32 {
        self.capacity.saturating_sub(self.used)
    }
}

/// Derived values for a player character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerDerived {
    /// `base value + passive-effect bonuses`, per attribute.
    pub modifiers: AttributeMap<i32>,
    pub encumbrance: Encumbrance,
}

impl PlayerDerived {
    pub fn compute(attributes: &AttributeMap<i32>, bonuses: &ItemBonuses) -> Self {
        Self {
            modifiers: attributes.map(|key, base| base.saturating_add(bonuses.bonuses[key])),
            encumbrance: Encumbrance::compute(attributes, bonuses),
        }
    }
}

/// Derived values for a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureDerived {
    /// `challenge_rating² × 100`, saturating at `u64::MAX`.
    pub experience: u64,
}

impl CreatureDerived {
    pub fn compute(challenge_rating: u32) -> Self {
        let cr = u64::from(challenge_rating);
        Self {
            experience: (cr * cr).saturating_mul(RulesConfig::XP_PER_CR_SQUARED),
        }
    }
}

/// Read-only derived data handed to presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DerivedView {
    Player(PlayerDerived),
    Creature(CreatureDerived),
    /// Unrecognized entity kind; nothing derived.
    PassThrough,
}

impl DerivedView {
    pub fn modifier(&self, key: AttributeKey) -> Option<i32> {
        match self {
            Self::Player(player) => Some(player.modifiers[key]),
            _ => None,
        }
    }

    pub fn encumbrance(&self) -> Option<&Encumbrance> {
        match self {
            Self::Player(player) => Some(&player.encumbrance),
            _ => None,
        }
    }

    pub fn experience(&self) -> Option<u64> {
        match self {
            Self::Creature(creature) => Some(creature.experience),
            _ => None,
        }
    }
}

/// Computes the derived view of `entity`.
///
/// Idempotent and side-effect free: takes the entity by shared reference and
/// returns the same view for the same input.
pub fn derive(entity: &Entity) -> DerivedView {
    match &entity.kind {
        EntityKind::Player => {
            let bonuses = compute_bonuses(&entity.inventory);
            DerivedView::Player(PlayerDerived::compute(&entity.attributes, &bonuses))
        }
        EntityKind::Creature => {
            DerivedView::Creature(CreatureDerived::compute(entity.challenge_rating))
        }
        EntityKind::Other(_) => DerivedView::PassThrough,
    }
}
