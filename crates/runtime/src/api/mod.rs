//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate:
//! collaborator contracts, presentation actions, and the error taxonomy.

pub mod actions;
pub mod collaborators;
pub mod errors;

pub use actions::ChargenAction;
pub use collaborators::{EntityStore, ItemCatalog, Randomizer, RollOutcome, TableDrawer, TableResult};
pub use errors::{CollaboratorError, Result, WorkflowError};
