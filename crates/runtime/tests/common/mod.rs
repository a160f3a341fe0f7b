//! Test doubles shared by the workflow integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::broadcast::{self, error::TryRecvError};

use rustrim_core::{Entity, EntityId, EntityPatch, GearTables, Item, RollData};
use rustrim_runtime::{
    CatalogImpl, ChargenEvent, ChargenWorkflow, CollaboratorError, EntityStore,
    InMemoryEntityStore, Randomizer, RollOutcome, TableDrawer, TableResult,
};

pub const PC: &str = "pc-1";

pub fn pc() -> EntityId {
    EntityId::from(PC)
}

pub fn fresh_player() -> Entity {
    Entity::new_player(PC, "Wren")
}

pub fn catalog() -> CatalogImpl {
    CatalogImpl::from_items([
        Item::weapon("Spear", 2),
        Item::weapon("Dagger", 1),
        Item::gear("Rope (50ft)", 1),
        Item::gear("Torch", 1),
        Item::gear("Chalk", 1),
    ])
}

/// Maps each default gear table to one fixed item.
pub fn default_tables() -> FixedTables {
    FixedTables::new([
        (GearTables::DEFAULT_LESSER_BONUS, "Rope (50ft)"),
        (GearTables::DEFAULT_HIGHER_BONUS, "Spear"),
        (GearTables::DEFAULT_EXPLORATION_1, "Torch"),
        (GearTables::DEFAULT_EXPLORATION_2, "Chalk"),
    ])
}

pub fn workflow(
    store: Arc<dyn EntityStore>,
    randomizer: Arc<dyn Randomizer>,
    tables: Arc<dyn TableDrawer>,
) -> ChargenWorkflow {
    ChargenWorkflow::builder()
        .store(store)
        .randomizer(randomizer)
        .tables(tables)
        .catalog(Arc::new(catalog()))
        .build()
        .expect("all collaborators set")
}

pub fn store_with(entity: Entity) -> Arc<InMemoryEntityStore> {
    Arc::new(InMemoryEntityStore::with_entities([entity]))
}

/// Returns queued totals in order and records every call.
pub struct ScriptedRandomizer {
    totals: Mutex<VecDeque<i64>>,
    calls: Mutex<Vec<(String, RollData)>>,
}

impl ScriptedRandomizer {
    pub fn new(totals: impl IntoIterator<Item = i64>) -> Self {
        Self {
            totals: Mutex::new(totals.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, RollData)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Randomizer for ScriptedRandomizer {
    async fn roll(&self, formula: &str, data: &RollData) -> Result<RollOutcome, CollaboratorError> {
        self.calls
            .lock()
            .unwrap()
            .push((formula.to_string(), data.clone()));
        let total = self
            .totals
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| CollaboratorError::Unavailable("script exhausted".into()))?;
        Ok(RollOutcome::new(formula, total))
    }
}

/// Always fails.
pub struct OfflineRandomizer;

#[async_trait]
impl Randomizer for OfflineRandomizer {
    async fn roll(&self, _: &str, _: &RollData) -> Result<RollOutcome, CollaboratorError> {
        Err(CollaboratorError::Unavailable("randomizer offline".into()))
    }
}

/// Table name → fixed text, recording which tables were drawn.
pub struct FixedTables {
    results: HashMap<String, String>,
    draws: Mutex<Vec<String>>,
}

impl FixedTables {
    pub fn new<'a>(results: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            results: results
                .into_iter()
                .map(|(table, text)| (table.to_string(), text.to_string()))
                .collect(),
            draws: Mutex::new(Vec::new()),
        }
    }

    pub fn draws(&self) -> Vec<String> {
        self.draws.lock().unwrap().clone()
    }
}

#[async_trait]
impl TableDrawer for FixedTables {
    async fn draw(&self, table: &str) -> Result<TableResult, CollaboratorError> {
        self.draws.lock().unwrap().push(table.to_string());
        self.results
            .get(table)
            .map(|text| TableResult::new(table, text.clone()))
            .ok_or_else(|| CollaboratorError::TableNotFound(table.to_string()))
    }
}

/// Reads from an in-memory store but refuses every write.
pub struct ReadOnlyStore {
    pub inner: InMemoryEntityStore,
}

#[async_trait]
impl EntityStore for ReadOnlyStore {
    async fn load(&self, id: &EntityId) -> Result<Entity, CollaboratorError> {
        self.inner.load(id).await
    }

    async fn update(&self, _: &EntityId, _: EntityPatch) -> Result<Entity, CollaboratorError> {
        Err(CollaboratorError::Unavailable("write rejected".into()))
    }
}

/// Store that checks, at write time, that the bus has not run ahead of the
/// writes it already acknowledged.
pub struct ObservedStore {
    pub inner: InMemoryEntityStore,
    events: Mutex<broadcast::Receiver<ChargenEvent>>,
    tally: Mutex<Tally>,
}

#[derive(Default)]
struct Tally {
    writes: usize,
    events: usize,
    published_early: bool,
}

impl ObservedStore {
    pub fn new(inner: InMemoryEntityStore, events: broadcast::Receiver<ChargenEvent>) -> Self {
        Self {
            inner,
            events: Mutex::new(events),
            tally: Mutex::new(Tally::default()),
        }
    }

    /// Whether an event showed up before the write it reports was stored.
    pub fn published_early(&self) -> bool {
        self.tally.lock().unwrap().published_early
    }

    pub fn writes(&self) -> usize {
        self.tally.lock().unwrap().writes
    }
}

#[async_trait]
impl EntityStore for ObservedStore {
    async fn load(&self, id: &EntityId) -> Result<Entity, CollaboratorError> {
        self.inner.load(id).await
    }

    async fn update(&self, id: &EntityId, patch: EntityPatch) -> Result<Entity, CollaboratorError> {
        {
            let mut rx = self.events.lock().unwrap();
            let mut tally = self.tally.lock().unwrap();
            loop {
                match rx.try_recv() {
                    Ok(_) => tally.events += 1,
                    Err(TryRecvError::Lagged(missed)) => tally.events += missed as usize,
                    Err(_) => break,
                }
            }
            if tally.events > tally.writes {
                tally.published_early = true;
            }
        }
        let stored = self.inner.update(id, patch).await?;
        self.tally.lock().unwrap().writes += 1;
        Ok(stored)
    }
}
