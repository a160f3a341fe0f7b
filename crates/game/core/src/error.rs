//! Common error infrastructure for rustrim-core.
//!
//! Derived-stat computation is total and never fails. The only fallible
//! operations in this crate are the character-generation bookkeeping calls,
//! which report [`ChargenError`].
//!
//! # Design Principles
//!
//! - **Type Safety**: precondition failures name the precondition that failed
//! - **Severity Classification**: errors are categorized for recovery strategies
//! - **No partial writes**: every fallible operation either applies fully or
//!   leaves its input untouched

use crate::chargen::GenerationKey;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry once the missing state exists
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: a programming error in the caller or the host adapter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry after the required state exists.
    ///
    /// Examples: finalize while steps are pending, bonus gear before attributes
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: drawn table entry missing from the catalog
    Validation,

    /// Internal error - the caller referenced something that cannot exist.
    ///
    /// Examples: a generation key outside the configured set
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for errors raised by the rules and the layers above them.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait RulesError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A required state that a guarded transition found missing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precondition {
    /// Finalize requested while these keys are still pending.
    StepsPending { pending: Vec<GenerationKey> },

    /// Bonus gear requested before every attribute has been rolled.
    AttributesPending,

    /// Character generation only applies to player entities.
    NotAPlayer,

    /// The player entity carries no generation flags at all.
    NoGenerationFlags,

    /// Generation was already finalized and is never re-opened.
    AlreadyComplete,
}

impl core::fmt::Display for Precondition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StepsPending { pending } => {
                write!(f, "generation steps still pending:")?;
                for key in pending {
                    write!(f, " {key}")?;
                }
                Ok(())
            }
            Self::AttributesPending => write!(f, "all attributes must be generated first"),
            Self::NotAPlayer => write!(f, "entity is not a player character"),
            Self::NoGenerationFlags => write!(f, "entity has no generation flags"),
            Self::AlreadyComplete => write!(f, "character generation is already complete"),
        }
    }
}

/// Errors raised by character-generation bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChargenError {
    /// A guarded operation ran without its required state; nothing changed.
    #[error("precondition violated: {0}")]
    PreconditionViolation(Precondition),

    /// A key outside the closed set, or one absent from the flag mapping.
    #[error("unknown generation key `{key}`")]
    UnknownKey { key: String },
}

impl ChargenError {
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }
}

impl From<Precondition> for ChargenError {
    fn from(precondition: Precondition) -> Self {
        Self::PreconditionViolation(precondition)
    }
}

impl RulesError for ChargenError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PreconditionViolation(_) => ErrorSeverity::Recoverable,
            Self::UnknownKey { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PreconditionViolation(Precondition::StepsPending { .. }) => {
                "CHARGEN_STEPS_PENDING"
            }
            Self::PreconditionViolation(Precondition::AttributesPending) => {
                "CHARGEN_ATTRIBUTES_PENDING"
            }
            Self::PreconditionViolation(Precondition::NotAPlayer) => "CHARGEN_NOT_A_PLAYER",
            Self::PreconditionViolation(Precondition::NoGenerationFlags) => {
                "CHARGEN_NO_GENERATION_FLAGS"
            }
            Self::PreconditionViolation(Precondition::AlreadyComplete) => {
                "CHARGEN_ALREADY_COMPLETE"
            }
            Self::UnknownKey { .. } => "CHARGEN_UNKNOWN_KEY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_steps_are_listed_in_message() {
        let err = ChargenError::from(Precondition::StepsPending {
            pending: vec![GenerationKey::Health, GenerationKey::Gear2],
        });
        assert_eq!(
            err.to_string(),
            "precondition violated: generation steps still pending: health gear2"
        );
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
    }

    #[test]
    fn unknown_key_is_internal() {
        let err = ChargenError::unknown_key("luck");
        assert!(err.severity().is_internal());
        assert_eq!(err.error_code(), "CHARGEN_UNKNOWN_KEY");
        assert_eq!(err.severity().as_str(), "internal");
    }
}
