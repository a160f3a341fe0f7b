//! Character-generation progress tracking.
//!
//! A new player character starts with every step pending: six attribute
//! rolls, a health roll and three gear draws. Steps clear one at a time and
//! never come back; once everything is clear the character can be finalized.
//!
//! ```text
//! NotStarted ──clear──▶ InProgress ──clear…──▶ (all clear) ──finalize──▶ Complete
//! ```
//!
//! This module only keeps the books. Rolling and drawing are driven by the
//! runtime's workflow.
mod flags;
mod gear;

pub use flags::{ChargenState, GenerationFlags, GenerationKey};
pub use gear::{GearTier, highest_base_value};
