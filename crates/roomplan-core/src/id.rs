//! Entity identity allocation.
//!
//! The engine never mints identities itself; it consumes an [`IdProvider`]
//! supplied by the host. [`UuidIds`] is the production provider, while
//! [`SequentialIds`] produces reproducible monotonic identities for tests
//! and deterministic hosts.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a room, furniture item, or wall element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Wraps an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Allocates collision-free entity identities.
pub trait IdProvider {
    /// Returns a fresh identity, never previously handed out.
    fn next_id(&mut self) -> EntityId;
}

/// Random v4 identities.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn next_id(&mut self) -> EntityId {
        EntityId(Uuid::new_v4())
    }
}

/// Monotonic identities, reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Creates a provider starting at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> EntityId {
        self.next += 1;
        EntityId(Uuid::from_u128(self.next))
    }
}
