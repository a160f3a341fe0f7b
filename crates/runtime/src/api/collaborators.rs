//! Collaborator contracts the chargen workflow is wired against.
//!
//! Hosts plug in implementations so the same workflow runs against an
//! in-memory store in tests, a document database in production, or a
//! scripted randomizer in fixtures.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use rustrim_core::{Entity, EntityId, EntityPatch, Item, RollData};

use super::errors::CollaboratorError;

/// Result of evaluating a roll formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub formula: String,
    pub total: i64,
}

impl RollOutcome {
    pub fn new(formula: impl Into<String>, total: i64) -> Self {
        Self {
            formula: formula.into(),
            total,
        }
    }
}

/// Result of drawing one entry from a named table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableResult {
    pub table: String,
    pub text: String,
}

impl TableResult {
    pub fn new(table: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            text: text.into(),
        }
    }
}

/// Persistence for entity records.
///
/// `update` applies a partial patch atomically and must never clobber fields
/// the patch leaves unset.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Load the current record for `id`.
    async fn load(&self, id: &EntityId) -> Result<Entity, CollaboratorError>;

    /// Apply `patch` to `id` and return the record as stored afterwards.
    async fn update(&self, id: &EntityId, patch: EntityPatch) -> Result<Entity, CollaboratorError>;
}

/// Evaluates dice formulas.
///
/// The formula is opaque to the workflow; `data` resolves `@path` references.
#[async_trait]
pub trait Randomizer: Send + Sync {
    async fn roll(&self, formula: &str, data: &RollData) -> Result<RollOutcome, CollaboratorError>;
}

/// Draws entries from named roll tables.
#[async_trait]
pub trait TableDrawer: Send + Sync {
    async fn draw(&self, table: &str) -> Result<TableResult, CollaboratorError>;
}

/// Name-keyed item lookup.
pub trait ItemCatalog: Send + Sync {
    /// Returns an owned copy of the named item, if the catalog has one.
    fn find_by_name(&self, name: &str) -> Option<Item>;
}
