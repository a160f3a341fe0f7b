//! Presentation actions that drive the chargen workflow.
//!
//! Hosts forward sheet events such as `generate-ability` with their dataset
//! key; [`ChargenAction::from_event`] turns them into a typed action.
use std::fmt;

use serde::{Deserialize, Serialize};

use rustrim_core::{AttributeKey, ChargenError, GearTier};

/// One chargen step requested by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "key", rename_all = "kebab-case")]
pub enum ChargenAction {
    GenerateAbility(AttributeKey),
    GenerateHealth,
    RollGear(GearTier),
    CompleteChargen,
}

impl ChargenAction {
    pub const GENERATE_ABILITY: &'static str = "generate-ability";
    pub const GENERATE_HEALTH: &'static str = "generate-health";
    pub const ROLL_GEAR: &'static str = "roll-gear";
    pub const COMPLETE_CHARGEN: &'static str = "complete-chargen";

    /// Parses an event name plus its optional key.
    ///
    /// # Errors
    ///
    /// `UnknownKey` for an unrecognized event, a missing key, or a key
    /// outside the closed set for that event.
    pub fn from_event(event: &str, key: Option<&str>) -> Result<Self, ChargenError> {
        match (event, key) {
            (Self::GENERATE_ABILITY, Some(key)) => AttributeKey::parse(key).map(Self::GenerateAbility),
            (Self::GENERATE_HEALTH, _) => Ok(Self::GenerateHealth),
            (Self::ROLL_GEAR, Some(key)) => GearTier::parse(key).map(Self::RollGear),
            (Self::COMPLETE_CHARGEN, _) => Ok(Self::CompleteChargen),
            (other, _) => Err(ChargenError::unknown_key(other)),
        }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            Self::GenerateAbility(_) => Self::GENERATE_ABILITY,
            Self::GenerateHealth => Self::GENERATE_HEALTH,
            Self::RollGear(_) => Self::ROLL_GEAR,
            Self::CompleteChargen => Self::COMPLETE_CHARGEN,
        }
    }
}

impl fmt::Display for ChargenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerateAbility(key) => write!(f, "{}({})", self.event_name(), key),
            Self::RollGear(tier) => write!(f, "{}({})", self.event_name(), tier.key()),
            _ => f.write_str(self.event_name()),
        }
    }
}
