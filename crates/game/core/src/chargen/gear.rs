//! Starting-gear tiers and the roll table each one draws from.

use crate::chargen::{GenerationFlags, GenerationKey};
use crate::config::{GearTables, RulesConfig};
use crate::error::{ChargenError, Precondition};
use crate::state::{AttributeMap, Entity};

/// The three starting-gear draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GearTier {
    /// Depends on the rolled attributes; see [`GearTier::table`].
    BonusGear,
    Gear1,
    Gear2,
}

impl GearTier {
    /// The generation flag this draw clears.
    pub const fn key(self) -> GenerationKey {
        match self {
            Self::BonusGear => GenerationKey::BonusGear,
            Self::Gear1 => GenerationKey::Gear1,
            Self::Gear2 => GenerationKey::Gear2,
        }
    }

    /// Parses a host-supplied tier key.
    pub fn parse(key: &str) -> Result<Self, ChargenError> {
        Self::try_from(GenerationKey::parse(key)?)
    }

    /// Whether this tier may be drawn given the current flags.
    ///
    /// # Errors
    ///
    /// Bonus gear requires every attribute to be generated first.
    pub fn check_ready(self, flags: &GenerationFlags) -> Result<(), ChargenError> {
        match self {
            Self::BonusGear if !flags.is_attribute_set_generated() => {
                Err(Precondition::AttributesPending.into())
            }
            _ => Ok(()),
        }
    }

    /// Name of the table to draw from.
    ///
    /// Bonus gear reads the lesser table when the best attribute is at most
    /// [`RulesConfig::LESSER_GEAR_TIER_MAX`], the higher table otherwise. The
    /// exploration tiers always use their fixed table.
    pub fn table<'a>(self, attributes: &AttributeMap<i32>, tables: &'a GearTables) -> &'a str {
        match self {
            Self::BonusGear if attributes.max_value() <= RulesConfig::LESSER_GEAR_TIER_MAX => {
                &tables.lesser_bonus
            }
            Self::BonusGear => &tables.higher_bonus,
            Self::Gear1 => &tables.exploration_1,
            Self::Gear2 => &tables.exploration_2,
        }
    }
}

impl TryFrom<GenerationKey> for GearTier {
    type Error = ChargenError;

    fn try_from(key: GenerationKey) -> Result<Self, Self::Error> {
        match key {
            GenerationKey::BonusGear => Ok(Self::BonusGear),
            GenerationKey::Gear1 => Ok(Self::Gear1),
            GenerationKey::Gear2 => Ok(Self::Gear2),
            other => Err(ChargenError::unknown_key(other.as_str())),
        }
    }
}

/// Highest base value across the six attributes.
pub fn highest_base_value(entity: &Entity) -> i32 {
    entity.attributes.max_value()
}
