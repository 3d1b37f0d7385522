//! Caller-owned identifier allocation.

use std::fmt;

/// Identifies an entity placed on a grid (a file block, a robot, a region).
///
/// Issued by an [`IdCounter`]. IDs from different counters are unrelated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonic [`EntityId`] source owned by whoever creates entities.
///
/// There is no process-wide counter: each independent run builds its own
/// `IdCounter`, so two runs never observe each other's IDs and nothing has
/// to be reset between them.
///
/// # Examples
///
/// ```
/// use gridwalk_core::{EntityId, IdCounter};
///
/// let mut ids = IdCounter::new();
/// assert_eq!(ids.next_id(), EntityId(0));
/// assert_eq!(ids.next_id(), EntityId(1));
///
/// let mut other = IdCounter::new();
/// assert_eq!(other.next_id(), EntityId(0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    /// A counter whose first ID is `EntityId(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter whose first ID is `EntityId(first)`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Allocate the next ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// The ID the next call to [`next_id`](Self::next_id) will return,
    /// without consuming it.
    pub fn peek(&self) -> EntityId {
        EntityId(self.next)
    }

    /// Number of IDs issued since construction or the last reset, when
    /// the counter started at zero.
    pub fn issued(&self) -> u64 {
        self.next
    }

    /// Restart allocation at `EntityId(0)`.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}
