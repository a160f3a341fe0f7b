//! Runtime orchestration for character generation.
//!
//! This crate wires the pure rules from `rustrim-core` to async collaborators
//! (entity store, randomizer, roll tables, item catalog) and exposes
//! [`ChargenWorkflow`] to drive a character from fresh record to finalized
//! sheet. Hosts subscribe to [`ChargenEvent`]s to re-render after each
//! persisted step.
//!
//! Modules are organized by responsibility:
//! - [`workflow`] hosts the chargen state machine and its builder
//! - [`api`] exposes collaborator contracts, presentation actions and errors
//! - [`events`] provides the broadcast bus for refresh notifications
//! - [`oracle`] and [`repository`] provide in-memory collaborator adapters
//! - [`config`] reads runtime settings and environment overrides
pub mod api;
pub mod config;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod workflow;

pub use api::{
    ChargenAction, CollaboratorError, EntityStore, ItemCatalog, Randomizer, Result, RollOutcome,
    TableDrawer, TableResult, WorkflowError,
};
pub use config::RuntimeConfig;
pub use events::{ChargenEvent, ChargenOutcome, EventBus};
pub use oracle::{CatalogImpl, DiceFormula, DiceRandomizer, OracleManager, RollTablesImpl};
pub use repository::InMemoryEntityStore;
pub use workflow::{ChargenWorkflow, ChargenWorkflowBuilder};
