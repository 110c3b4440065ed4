//! In-process broadcast bus for domain events.

use tokio::sync::broadcast;
use tracing::trace;

use super::DomainEvent;

/// Fan-out publisher for [`DomainEvent`]s.
///
/// Publishing never fails: with no subscribers the event is dropped.
/// Slow subscribers lag and skip events rather than blocking publishers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to all events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to current subscribers.
    pub fn publish(&self, event: DomainEvent) {
        let link_id = event.payload.link_id().clone();
        match self.sender.send(event) {
            Ok(receivers) => trace!(%link_id, receivers, "Published share event"),
            Err(_) => trace!(%link_id, "Share event dropped, no subscribers"),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
