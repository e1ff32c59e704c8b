//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`SnapshotId`] allocation.
static SNAPSHOT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-snapshot identifier for a lattice state.
///
/// Allocated from a monotonic atomic counter via [`SnapshotId::next`].
/// Every lattice mutation (rotation, flip, reset) yields a new snapshot
/// with a fresh id, even when the resulting contents happen to equal an
/// earlier state. Derived indexes (the manifold map) record the id they
/// were built from, so a stale index is detected by a single comparison.
///
/// Cloning a snapshot preserves its id, which is correct because the
/// cubie storage is shared copy-on-write and therefore identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnapshotId(u64);

impl SnapshotId {
    /// Allocate a fresh, unique snapshot ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(SNAPSHOT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of player moves (twists and flips) since the last shuffle/reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MoveCount(pub u64);

impl MoveCount {
    /// The count after one more move.
    pub fn incremented(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MoveCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MoveCount {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
