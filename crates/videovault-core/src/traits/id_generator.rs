//! Injectable share-link identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::types::id::LinkId;

/// Produces fresh, unique link identifiers.
pub trait IdGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Return an identifier that has not been returned before.
    fn next_link_id(&self) -> LinkId;
}

/// Random 32-character hex tokens, suitable for public URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIdGenerator;

impl IdGenerator for TokenIdGenerator {
    fn next_link_id(&self) -> LinkId {
        LinkId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Deterministic `"{prefix}-1"`, `"{prefix}-2"`, ... identifiers.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Start counting from 1 with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    /// Start counting from `first`.
    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("link")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_link_id(&self) -> LinkId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        LinkId::new(format!("{}-{n}", self.prefix))
    }
}
