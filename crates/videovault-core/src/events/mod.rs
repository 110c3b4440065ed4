//! Domain events emitted by share-link operations.
//!
//! Events are published on the in-process [`EventBus`] and can be consumed
//! by audit logging or a realtime layer sitting above this workspace.

pub mod bus;
pub mod share;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use bus::EventBus;
pub use share::ShareEvent;

/// Wrapper for a domain event with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred, as reported by the injected clock.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: ShareEvent,
}

impl DomainEvent {
    /// Create a new domain event stamped at `timestamp`.
    pub fn new(timestamp: DateTime<Utc>, payload: ShareEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            payload,
        }
    }
}
