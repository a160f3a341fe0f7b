//! Chargen workflow event types.

use serde::{Deserialize, Serialize};

use rustrim_core::{AttributeKey, ChargenState, EntityId, GearTier, Health, Item};

/// A persisted chargen step.
///
/// Published only after the entity store acknowledged the write, so
/// subscribers can re-render from the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ChargenEvent {
    AttributeRolled {
        entity: EntityId,
        key: AttributeKey,
        value: i32,
    },

    HealthRolled {
        entity: EntityId,
        health: Health,
    },

    GearAdded {
        entity: EntityId,
        tier: GearTier,
        table: String,
        item: Item,
    },

    Completed {
        entity: EntityId,
    },
}

impl ChargenEvent {
    pub fn entity(&self) -> &EntityId {
        match self {
            Self::AttributeRolled { entity, .. }
            | Self::HealthRolled { entity, .. }
            | Self::GearAdded { entity, .. }
            | Self::Completed { entity } => entity,
        }
    }
}

/// What a transition changed, returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargenOutcome {
    pub event: ChargenEvent,
    /// Progress after the transition was persisted.
    pub state: ChargenState,
}
