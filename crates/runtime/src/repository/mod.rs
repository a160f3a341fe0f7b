//! Entity persistence adapters.
//!
//! The [`crate::api::EntityStore`] contract lives in the API module; this
//! module holds the implementations shipped with the runtime.

mod memory;

pub use memory::InMemoryEntityStore;
