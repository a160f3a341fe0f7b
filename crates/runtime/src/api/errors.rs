//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the rules, the collaborators, and content resolution so
//! hosts can bubble them up with consistent context.
use thiserror::Error;

use rustrim_core::{ChargenError, EntityId, ErrorSeverity, RulesError};

pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Failures reported by a collaborator (store, randomizer, table drawer).
///
/// The workflow never retries these; they propagate to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("entity store lock was poisoned")]
    LockPoisoned,

    #[error("invalid roll formula `{formula}`: {reason}")]
    InvalidFormula { formula: String, reason: String },

    #[error("roll formula references unknown value `@{0}`")]
    UnresolvedReference(String),

    #[error("roll total {total} does not fit an attribute or health value")]
    RollOutOfRange { total: i64 },

    #[error("roll table `{0}` not found")]
    TableNotFound(String),

    #[error("roll table `{0}` has no drawable entries")]
    EmptyTable(String),

    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

impl RulesError for CollaboratorError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unavailable(_) => ErrorSeverity::Recoverable,
            Self::EntityNotFound(_)
            | Self::InvalidFormula { .. }
            | Self::UnresolvedReference(_)
            | Self::RollOutOfRange { .. }
            | Self::TableNotFound(_)
            | Self::EmptyTable(_) => ErrorSeverity::Validation,
            Self::LockPoisoned => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EntityNotFound(_) => "COLLABORATOR_ENTITY_NOT_FOUND",
            Self::LockPoisoned => "COLLABORATOR_LOCK_POISONED",
            Self::InvalidFormula { .. } => "COLLABORATOR_INVALID_FORMULA",
            Self::UnresolvedReference(_) => "COLLABORATOR_UNRESOLVED_REFERENCE",
            Self::RollOutOfRange { .. } => "COLLABORATOR_ROLL_OUT_OF_RANGE",
            Self::TableNotFound(_) => "COLLABORATOR_TABLE_NOT_FOUND",
            Self::EmptyTable(_) => "COLLABORATOR_EMPTY_TABLE",
            Self::Unavailable(_) => "COLLABORATOR_UNAVAILABLE",
        }
    }
}

/// Errors returned by [`crate::ChargenWorkflow`] transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Precondition violations and unknown keys raised by the rules.
    #[error(transparent)]
    Chargen(#[from] ChargenError),

    /// A table draw produced text the item catalog does not know.
    #[error("table `{table}` produced `{text}`, which is not in the item catalog")]
    LookupMiss { table: String, text: String },

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error("workflow requires a {0} before building")]
    MissingCollaborator(&'static str),
}

impl WorkflowError {
    pub fn lookup_miss(table: impl Into<String>, text: impl Into<String>) -> Self {
        Self::LookupMiss {
            table: table.into(),
            text: text.into(),
        }
    }
}

impl RulesError for WorkflowError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Chargen(err) => err.severity(),
            Self::LookupMiss { .. } => ErrorSeverity::Validation,
            Self::Collaborator(err) => err.severity(),
            Self::MissingCollaborator(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Chargen(err) => err.error_code(),
            Self::LookupMiss { .. } => "WORKFLOW_LOOKUP_MISS",
            Self::Collaborator(err) => err.error_code(),
            Self::MissingCollaborator(_) => "WORKFLOW_MISSING_COLLABORATOR",
        }
    }
}
