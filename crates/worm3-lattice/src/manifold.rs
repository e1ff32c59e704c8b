//! Grid-id → current-location index.
//!
//! The map is derived state: it is valid only for the exact lattice
//! snapshot it was built from, and records that snapshot's id so misuse is
//! caught by [`ManifoldMap::ensure_current`] instead of silently resolving
//! a partner to a stale slot.

use crate::error::LatticeError;
use crate::grid::GridId;
use crate::lattice::Lattice;
use indexmap::IndexMap;
use worm3_core::{Location, SnapshotId};

/// Lookup from every sticker's [`GridId`] to where it currently sits.
///
/// Iteration order follows the lattice's sticker order (x, y, z) at build
/// time, so two maps built from equal layouts iterate identically.
#[derive(Clone, Debug)]
pub struct ManifoldMap {
    snapshot: SnapshotId,
    size: u32,
    entries: IndexMap<GridId, Location>,
}

impl ManifoldMap {
    /// Index every sticker of `lattice`.
    pub fn build(lattice: &Lattice) -> Self {
        let size = lattice.size();
        let mut entries = IndexMap::with_capacity(lattice.sticker_count());
        for (loc, st) in lattice.stickers() {
            entries.insert(GridId::of(st, size), loc);
        }
        log::debug!(
            "manifold map rebuilt: {} ids from snapshot {}",
            entries.len(),
            lattice.id()
        );
        Self {
            snapshot: lattice.id(),
            size,
            entries,
        }
    }

    /// Snapshot this map was built from.
    pub fn built_from(&self) -> SnapshotId {
        self.snapshot
    }

    /// Edge length of the source lattice.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether this map describes `lattice`.
    pub fn is_current_for(&self, lattice: &Lattice) -> bool {
        self.snapshot == lattice.id()
    }

    /// `Err(LatticeError::StaleManifold)` unless this map describes `lattice`.
    pub fn ensure_current(&self, lattice: &Lattice) -> Result<(), LatticeError> {
        if self.is_current_for(lattice) {
            Ok(())
        } else {
            Err(LatticeError::StaleManifold {
                map: self.snapshot,
                lattice: lattice.id(),
            })
        }
    }

    /// Current location of the sticker with `id`.
    pub fn get(&self, id: GridId) -> Option<Location> {
        self.entries.get(&id).copied()
    }

    /// Number of indexed stickers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty. Never true for a map built from a lattice.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(id, location)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (GridId, Location)> + '_ {
        self.entries.iter().map(|(id, loc)| (*id, *loc))
    }

    /// Id of the sticker at `location` in `lattice`.
    ///
    /// Fails with `StaleManifold` if the map does not describe `lattice`,
    /// or `NoSticker` if the slot is empty.
    pub fn id_at(&self, lattice: &Lattice, location: Location) -> Result<GridId, LatticeError> {
        self.ensure_current(lattice)?;
        lattice
            .sticker(location)
            .map(|st| GridId::of(st, self.size))
            .ok_or(LatticeError::NoSticker { location })
    }

    /// Current location of the antipodal partner of the sticker at
    /// `location`.
    ///
    /// `Ok(None)` when the partner id is absent from the map; callers then
    /// flip the source alone.
    pub fn antipode_of(
        &self,
        lattice: &Lattice,
        location: Location,
    ) -> Result<Option<Location>, LatticeError> {
        let id = self.id_at(lattice, location)?;
        Ok(self.get(id.antipode()))
    }

    /// Copy of this map with `id` unindexed.
    #[cfg(test)]
    pub(crate) fn without(&self, id: GridId) -> Self {
        let mut map = self.clone();
        map.entries.shift_remove(&id);
        map
    }

    /// Copy of this map with `id` pointing at `location`.
    #[cfg(test)]
    pub(crate) fn with_entry(&self, id: GridId, location: Location) -> Self {
        let mut map = self.clone();
        map.entries.insert(id, location);
        map
    }
}
