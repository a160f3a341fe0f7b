//! Broadcast bus for chargen events.

use tokio::sync::broadcast;

use super::types::ChargenEvent;

/// Best-effort fan-out of [`ChargenEvent`]s.
///
/// Slow subscribers lag and lose the oldest events; publishing never blocks
/// the workflow.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ChargenEvent>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with the given capacity (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event to every current subscriber.
    ///
    /// Returns how many subscribers received it.
    pub fn publish(&self, event: ChargenEvent) -> usize {
        match self.tx.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                // No subscribers - this is normal, not an error
                tracing::trace!("no subscribers for chargen event");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChargenEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
