//! Event bus for chargen refresh notifications.
//!
//! The workflow publishes one [`ChargenEvent`] per persisted step; hosts
//! subscribe to re-render sheets from the stored entity.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::{ChargenEvent, ChargenOutcome};
