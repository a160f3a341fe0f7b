//! In-memory EntityStore implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use rustrim_core::{Entity, EntityId, EntityPatch};

use crate::api::{CollaboratorError, EntityStore};

/// In-memory implementation of [`EntityStore`].
///
/// Stores entities indexed by id. `update` applies the whole patch under one
/// write lock, so readers never observe a half-applied step.
pub struct InMemoryEntityStore {
    entities: RwLock<HashMap<EntityId, Entity>>,
}

impl InMemoryEntityStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }

    /// Create with an initial set of entities.
    pub fn with_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let entities = entities
            .into_iter()
            .map(|entity| (entity.id.clone(), entity))
            .collect();
        Self {
            entities: RwLock::new(entities),
        }
    }

    /// Insert or replace an entity.
    pub fn insert(&self, entity: Entity) -> Result<(), CollaboratorError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|_| CollaboratorError::LockPoisoned)?;
        entities.insert(entity.id.clone(), entity);
        Ok(())
    }

    /// Snapshot of the stored record, outside the async contract.
    ///
    /// `Ok(None)` means the id is absent; lock failures surface the same way
    /// they do through [`EntityStore::load`].
    pub fn get(&self, id: &EntityId) -> Result<Option<Entity>, CollaboratorError> {
        let entities = self
            .entities
            .read()
            .map_err(|_| CollaboratorError::LockPoisoned)?;
        Ok(entities.get(id).cloned())
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn load(&self, id: &EntityId) -> Result<Entity, CollaboratorError> {
        let entities = self
            .entities
            .read()
            .map_err(|_| CollaboratorError::LockPoisoned)?;
        entities
            .get(id)
            .cloned()
            .ok_or_else(|| CollaboratorError::EntityNotFound(id.clone()))
    }

    async fn update(&self, id: &EntityId, patch: EntityPatch) -> Result<Entity, CollaboratorError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|_| CollaboratorError::LockPoisoned)?;
        let entity = entities
            .get_mut(id)
            .ok_or_else(|| CollaboratorError::EntityNotFound(id.clone()))?;
        patch.apply_to(entity);
        Ok(entity.clone())
    }
}
