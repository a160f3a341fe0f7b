//! Deterministic character rules shared by the runtime and host adapters.
//!
//! `rustrim-core` defines the canonical data model (entities, attributes,
//! items, generation flags) and exposes pure APIs over it:
//! - [`stats`] turns stored attributes and inventory into the derived view
//! - [`chargen`] tracks character-generation progress and gear-table choice
//!
//! Nothing here performs I/O or randomness. Rolling dice, drawing from tables
//! and persisting entities belong to the collaborators wired up by the
//! runtime crate.
pub mod chargen;
pub mod config;
pub mod error;
pub mod state;
pub mod stats;

pub use chargen::{ChargenState, GearTier, GenerationFlags, GenerationKey, highest_base_value};
pub use config::{ChargenConfig, GearTables, RulesConfig};
pub use error::{ChargenError, ErrorSeverity, Precondition, RulesError};
pub use state::{
    AttributeBonusSet, AttributeKey, AttributeMap, Entity, EntityId, EntityKind, EntityPatch,
    Health, Item, ItemKind,
};
pub use stats::{
    CreatureDerived, DerivedView, Encumbrance, ItemBonuses, PlayerDerived, RollData,
    compute_bonuses, derive,
};
