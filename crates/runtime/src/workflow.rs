//! Character-generation workflow.
//!
//! Each transition re-reads the entity from the store, validates progress,
//! consults the randomizer or table collaborators, then writes everything it
//! changed as one [`EntityPatch`]. A [`ChargenEvent`] goes out on the bus only
//! after the store acknowledged that write, so subscribers always re-render
//! from persisted state.
//!
//! ```text
//! NotStarted ──roll/draw──▶ InProgress ──finalize──▶ Complete
//! ```

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use rustrim_core::{
    AttributeKey, ChargenConfig, ChargenError, ChargenState, Entity, EntityId, EntityPatch,
    GearTier, GenerationFlags, GenerationKey, Health, Precondition, RollData, RulesError,
};

use crate::api::{
    ChargenAction, CollaboratorError, EntityStore, ItemCatalog, Randomizer, Result, TableDrawer,
    WorkflowError,
};
use crate::config::RuntimeConfig;
use crate::events::{ChargenEvent, ChargenOutcome, EventBus};
use crate::oracle::OracleManager;

/// Drives chargen transitions for player entities.
///
/// Holds no entity state between calls; callers serialize transitions for
/// the same entity.
pub struct ChargenWorkflow {
    store: Arc<dyn EntityStore>,
    randomizer: Arc<dyn Randomizer>,
    tables: Arc<dyn TableDrawer>,
    catalog: Arc<dyn ItemCatalog>,
    config: ChargenConfig,
    events: EventBus,
}

impl ChargenWorkflow {
    /// Create a new workflow builder
    pub fn builder() -> ChargenWorkflowBuilder {
        ChargenWorkflowBuilder::new()
    }

    pub fn config(&self) -> &ChargenConfig {
        &self.config
    }

    /// Subscribe to persisted chargen steps
    pub fn subscribe(&self) -> broadcast::Receiver<ChargenEvent> {
        self.events.subscribe()
    }

    /// Run one presentation action against `id`.
    pub async fn handle(&self, id: &EntityId, action: ChargenAction) -> Result<ChargenOutcome> {
        debug!(entity = %id, %action, "handling chargen action");

        let result = match action {
            ChargenAction::GenerateAbility(key) => self.step_roll_attribute(id, key).await,
            ChargenAction::GenerateHealth => self.step_roll_health(id).await,
            ChargenAction::RollGear(tier) => self.step_draw_gear(id, tier).await,
            ChargenAction::CompleteChargen => self.step_finalize(id).await,
        };

        match &result {
            Ok(outcome) => {
                info!(entity = %id, %action, state = %outcome.state, "chargen step persisted");
            }
            Err(err) if err.severity().is_internal() => {
                error!(
                    entity = %id,
                    %action,
                    severity = err.severity().as_str(),
                    code = err.error_code(),
                    error = %err,
                    "chargen step failed"
                );
            }
            Err(err) => {
                warn!(
                    entity = %id,
                    %action,
                    severity = err.severity().as_str(),
                    code = err.error_code(),
                    error = %err,
                    "chargen step rejected"
                );
            }
        }

        result
    }

    /// Roll the ability formula into `key` and clear its flag.
    pub async fn roll_attribute(&self, id: &EntityId, key: AttributeKey) -> Result<ChargenOutcome> {
        self.handle(id, ChargenAction::GenerateAbility(key)).await
    }

    /// Roll the health formula into both `health.value` and `health.max`.
    pub async fn roll_health(&self, id: &EntityId) -> Result<ChargenOutcome> {
        self.handle(id, ChargenAction::GenerateHealth).await
    }

    /// Draw one item for `tier` and add a copy to the inventory.
    pub async fn draw_gear(&self, id: &EntityId, tier: GearTier) -> Result<ChargenOutcome> {
        self.handle(id, ChargenAction::RollGear(tier)).await
    }

    /// Mark generation complete once nothing is pending.
    pub async fn finalize(&self, id: &EntityId) -> Result<ChargenOutcome> {
        self.handle(id, ChargenAction::CompleteChargen).await
    }

    async fn step_roll_attribute(&self, id: &EntityId, key: AttributeKey) -> Result<ChargenOutcome> {
        let (entity, mut flags) = self.load_generating(id).await?;
        flags.clear(key.into())?;

        let formula = &self.config.ability_formula;
        let rolled = self
            .randomizer
            .roll(formula, &RollData::for_entity(&entity))
            .await?;
        let value = to_score(rolled.total)?;
        debug!(entity = %id, %key, formula = %formula, value, "rolled attribute");

        let patch = EntityPatch::new().attribute(key, value).generation(flags);
        let event = ChargenEvent::AttributeRolled {
            entity: id.clone(),
            key,
            value,
        };
        self.persist(id, patch, event).await
    }

    async fn step_roll_health(&self, id: &EntityId) -> Result<ChargenOutcome> {
        let (entity, mut flags) = self.load_generating(id).await?;
        flags.clear(GenerationKey::Health)?;

        let formula = &self.config.health_formula;
        let rolled = self
            .randomizer
            .roll(formula, &RollData::for_entity(&entity))
            .await?;
        let health = Health::full(to_score(rolled.total)?);
        debug!(entity = %id, formula = %formula, max = health.max, "rolled health");

        let patch = EntityPatch::new().health(health).generation(flags);
        let event = ChargenEvent::HealthRolled {
            entity: id.clone(),
            health,
        };
        self.persist(id, patch, event).await
    }

    async fn step_draw_gear(&self, id: &EntityId, tier: GearTier) -> Result<ChargenOutcome> {
        let (entity, mut flags) = self.load_generating(id).await?;
        tier.check_ready(&flags)?;
        flags.clear(tier.key())?;

        let table = tier
            .table(&entity.attributes, &self.config.gear_tables)
            .to_string();
        debug!(
            entity = %id,
            %tier,
            table = %table,
            highest = entity.attributes.max_value(),
            "drawing starting gear"
        );
        let drawn = self.tables.draw(&table).await?;
        let item = self
            .catalog
            .find_by_name(&drawn.text)
            .ok_or_else(|| WorkflowError::lookup_miss(&table, &drawn.text))?;

        let patch = EntityPatch::new().add_item(item.clone()).generation(flags);
        let event = ChargenEvent::GearAdded {
            entity: id.clone(),
            tier,
            table,
            item,
        };
        self.persist(id, patch, event).await
    }

    async fn step_finalize(&self, id: &EntityId) -> Result<ChargenOutcome> {
        let (_, mut flags) = self.load_generating(id).await?;
        flags.finalize()?;

        let patch = EntityPatch::new().generation(flags);
        let event = ChargenEvent::Completed { entity: id.clone() };
        self.persist(id, patch, event).await
    }

    /// Fresh read of a player whose generation is still open.
    async fn load_generating(&self, id: &EntityId) -> Result<(Entity, GenerationFlags)> {
        let entity = self.store.load(id).await?;
        if !entity.is_player() {
            return Err(ChargenError::from(Precondition::NotAPlayer).into());
        }
        let flags = entity
            .generation
            .clone()
            .ok_or(ChargenError::from(Precondition::NoGenerationFlags))?;
        if flags.is_finalized() {
            return Err(ChargenError::from(Precondition::AlreadyComplete).into());
        }
        Ok((entity, flags))
    }

    async fn persist(
        &self,
        id: &EntityId,
        patch: EntityPatch,
        event: ChargenEvent,
    ) -> Result<ChargenOutcome> {
        let stored = self.store.update(id, patch).await?;
        let state = stored
            .generation
            .as_ref()
            .map_or(ChargenState::NotStarted, GenerationFlags::state);

        let delivered = self.events.publish(event.clone());
        debug!(entity = %id, delivered, "published chargen event");

        Ok(ChargenOutcome { event, state })
    }
}

fn to_score(total: i64) -> Result<i32> {
    i32::try_from(total).map_err(|_| CollaboratorError::RollOutOfRange { total }.into())
}

/// Builder for [`ChargenWorkflow`].
pub struct ChargenWorkflowBuilder {
    config: RuntimeConfig,
    store: Option<Arc<dyn EntityStore>>,
    randomizer: Option<Arc<dyn Randomizer>>,
    tables: Option<Arc<dyn TableDrawer>>,
    catalog: Option<Arc<dyn ItemCatalog>>,
    events: Option<EventBus>,
}

impl ChargenWorkflowBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            store: None,
            randomizer: None,
            tables: None,
            catalog: None,
            events: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required entity store
    pub fn store(mut self, store: Arc<dyn EntityStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn randomizer(mut self, randomizer: Arc<dyn Randomizer>) -> Self {
        self.randomizer = Some(randomizer);
        self
    }

    pub fn tables(mut self, tables: Arc<dyn TableDrawer>) -> Self {
        self.tables = Some(tables);
        self
    }

    pub fn catalog(mut self, catalog: Arc<dyn ItemCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use the randomizer, tables and catalog of an [`OracleManager`].
    ///
    /// Individually set collaborators are replaced.
    pub fn oracles(self, oracles: &OracleManager) -> Self {
        self.randomizer(oracles.dice())
            .tables(oracles.tables())
            .catalog(oracles.catalog())
    }

    /// Share an existing bus instead of creating one from the config.
    pub fn event_bus(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Build the workflow
    pub fn build(self) -> Result<ChargenWorkflow> {
        let store = self
            .store
            .ok_or(WorkflowError::MissingCollaborator("entity store"))?;
        let randomizer = self
            .randomizer
            .ok_or(WorkflowError::MissingCollaborator("randomizer"))?;
        let tables = self
            .tables
            .ok_or(WorkflowError::MissingCollaborator("table drawer"))?;
        let catalog = self
            .catalog
            .ok_or(WorkflowError::MissingCollaborator("item catalog"))?;
        let events = self
            .events
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));

        Ok(ChargenWorkflow {
            store,
            randomizer,
            tables,
            catalog,
            config: self.config.chargen,
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{CatalogImpl, DiceRandomizer, RollTablesImpl};
    use crate::repository::InMemoryEntityStore;

    #[test]
    fn build_requires_every_collaborator() {
        let err = ChargenWorkflow::builder()
            .randomizer(Arc::new(DiceRandomizer::seeded(1)))
            .build()
            .err();
        assert_eq!(err, Some(WorkflowError::MissingCollaborator("entity store")));

        let err = ChargenWorkflow::builder()
            .store(Arc::new(InMemoryEntityStore::new()))
            .randomizer(Arc::new(DiceRandomizer::seeded(1)))
            .tables(Arc::new(RollTablesImpl::seeded(Vec::new(), 1)))
            .build()
            .err();
        assert_eq!(err, Some(WorkflowError::MissingCollaborator("item catalog")));
    }

    #[test]
    fn config_flows_into_the_workflow() {
        let workflow = ChargenWorkflow::builder()
            .config(RuntimeConfig::new(ChargenConfig::with_formulas("2d4", "1d4")))
            .store(Arc::new(InMemoryEntityStore::new()))
            .randomizer(Arc::new(DiceRandomizer::seeded(1)))
            .tables(Arc::new(RollTablesImpl::seeded(Vec::new(), 1)))
            .catalog(Arc::new(CatalogImpl::new()))
            .build()
            .unwrap();
        assert_eq!(workflow.config().ability_formula, "2d4");
        assert_eq!(workflow.config().health_formula, "1d4");
    }

    #[test]
    fn oversized_rolls_are_rejected() {
        assert_eq!(to_score(18).unwrap(), 18);
        assert!(matches!(
            to_score(i64::MAX),
            Err(WorkflowError::Collaborator(CollaboratorError::RollOutOfRange { .. }))
        ));
    }
}
