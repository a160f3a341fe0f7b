//! Derived data computation.
//!
//! # Architecture
//!
//! ```text
//! [ Inventory ] ──compute_bonuses──▶ [ ItemBonuses ]
//!                                          │
//! [ Base attributes ] ─────────────────────┤
//!                                          ▼
//!                                   [ DerivedView ] ──▶ RollData
//! ```
//!
//! ## Principles
//!
//! 1. **Stored vs computed**: only base values and inventory are stored;
//!    modifiers, encumbrance and experience are always recomputed
//! 2. **Unidirectional flow**: nothing here writes back to the entity
//! 3. **Total**: well-formed input never produces an error

mod bonus;
mod derived;
mod roll_data;

pub use bonus::{ItemBonuses, compute_bonuses};
pub use derived::{CreatureDerived, DerivedView, Encumbrance, PlayerDerived, derive};
pub use roll_data::RollData;
