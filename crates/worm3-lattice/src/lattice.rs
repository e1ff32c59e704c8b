//! The N×N×N cubie lattice.
//!
//! A [`Lattice`] is an immutable snapshot. Cubie storage sits behind an
//! `Arc`, so cloning a lattice is O(1) and every mutation (rotation, flip)
//! builds a replacement snapshot with a fresh [`SnapshotId`]. A reader
//! holding an older snapshot never observes a partially applied change.

use crate::error::LatticeError;
use crate::sticker::{Cubie, Sticker};
use std::sync::Arc;
use worm3_core::{Face, Location, Pos, SnapshotId};

/// Smallest supported edge length.
pub const MIN_SIZE: u32 = 2;

/// Largest supported edge length: `size²` must fit the three-digit grid
/// index (`31² = 961`).
pub const MAX_SIZE: u32 = 31;

/// Immutable snapshot of the cube.
#[derive(Clone, Debug)]
pub struct Lattice {
    size: u32,
    cubies: Arc<Vec<Cubie>>,
    id: SnapshotId,
}

impl Lattice {
    /// A solved lattice of edge length `size`.
    ///
    /// Returns `Err(LatticeError::InvalidSize)` outside
    /// [`MIN_SIZE`]`..=`[`MAX_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use worm3_lattice::Lattice;
    ///
    /// let lattice = Lattice::new(3).unwrap();
    /// assert_eq!(lattice.sticker_count(), 54);
    /// assert!(Lattice::new(1).is_err());
    /// ```
    pub fn new(size: u32) -> Result<Self, LatticeError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(LatticeError::InvalidSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        let s = size as i32;
        let mut cubies = Vec::with_capacity((size * size * size) as usize);
        for x in 0..s {
            for y in 0..s {
                for z in 0..s {
                    cubies.push(Cubie::solved(Pos::new(x, y, z), size));
                }
            }
        }
        Ok(Self::from_cubies(size, cubies))
    }

    /// Wrap freshly built storage as a new snapshot.
    pub(crate) fn from_cubies(size: u32, cubies: Vec<Cubie>) -> Self {
        Self {
            size,
            cubies: Arc::new(cubies),
            id: SnapshotId::next(),
        }
    }

    /// Edge length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Identity of this snapshot.
    pub fn id(&self) -> SnapshotId {
        self.id
    }

    /// Flat storage index of `pos`, or `None` if out of bounds.
    pub(crate) fn index_of(&self, pos: Pos) -> Option<usize> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        let s = self.size as usize;
        Some((pos.x as usize * s + pos.y as usize) * s + pos.z as usize)
    }

    /// Position of the cubie at flat storage index `i`.
    pub(crate) fn pos_of(&self, i: usize) -> Pos {
        let s = self.size as usize;
        Pos::new((i / (s * s)) as i32, ((i / s) % s) as i32, (i % s) as i32)
    }

    /// The cubie at `pos`, if in bounds.
    pub fn cubie(&self, pos: Pos) -> Option<&Cubie> {
        self.index_of(pos).map(|i| &self.cubies[i])
    }

    /// The sticker at `location`, if that slot holds one.
    pub fn sticker(&self, location: Location) -> Option<&Sticker> {
        self.cubie(location.pos)?.sticker(location.face)
    }

    /// Whether `location` holds a sticker on the exterior of the cube.
    pub fn is_exterior(&self, location: Location) -> bool {
        location.is_surface(self.size) && self.sticker(location).is_some()
    }

    /// Every sticker with its current location, in x, y, z order.
    pub fn stickers(&self) -> impl Iterator<Item = (Location, &Sticker)> + '_ {
        self.cubies.iter().enumerate().flat_map(move |(i, cubie)| {
            let pos = self.pos_of(i);
            cubie
                .stickers()
                .map(move |(face, st)| (Location { pos, face }, st))
        })
    }

    /// Total number of stickers (`6·size²` for any reachable state).
    pub fn sticker_count(&self) -> usize {
        self.cubies.iter().map(Cubie::len).sum()
    }

    /// All exterior slots on `face`, in x, y, z order.
    pub fn face_locations(&self, face: Face) -> Vec<Location> {
        let s = self.size as i32;
        let mut out = Vec::with_capacity((self.size * self.size) as usize);
        for x in 0..s {
            for y in 0..s {
                for z in 0..s {
                    let pos = Pos::new(x, y, z);
                    if face.contains(pos, self.size) {
                        out.push(Location { pos, face });
                    }
                }
            }
        }
        out
    }

    /// Borrow the cubie storage for building a replacement snapshot.
    pub(crate) fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// A new snapshot with the stickers at `locations` replaced by `f`.
    ///
    /// Locations without a sticker are skipped.
    pub(crate) fn with_stickers(
        &self,
        locations: &[Location],
        f: impl Fn(Sticker) -> Sticker,
    ) -> Lattice {
        let mut cubies = (*self.cubies).clone();
        for loc in locations {
            if let Some(i) = self.index_of(loc.pos) {
                if let Some(st) = cubies[i].sticker_mut(loc.face) {
                    *st = f(*st);
                }
            }
        }
        Lattice::from_cubies(self.size, cubies)
    }

    /// Whether every sticker shows its home color.
    pub fn is_pristine(&self) -> bool {
        self.stickers().all(|(_, st)| !st.is_flipped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use worm3_core::Color;

    #[test]
    fn new_rejects_unsupported_sizes() {
        assert!(matches!(
            Lattice::new(0),
            Err(LatticeError::InvalidSize { size: 0, .. })
        ));
        assert!(matches!(
            Lattice::new(1),
            Err(LatticeError::InvalidSize { size: 1, .. })
        ));
        assert!(Lattice::new(MAX_SIZE).is_ok());
        assert!(matches!(
            Lattice::new(MAX_SIZE + 1),
            Err(LatticeError::InvalidSize { .. })
        ));
    }

    #[test]
    fn sticker_count_is_six_size_squared() {
        for size in 2..=6 {
            let l = Lattice::new(size).unwrap();
            assert_eq!(l.sticker_count(), (6 * size * size) as usize);
        }
    }

    #[test]
    fn index_and_pos_round_trip() {
        let l = Lattice::new(4).unwrap();
        for i in 0..64 {
            assert_eq!(l.index_of(l.pos_of(i)), Some(i));
        }
        assert_eq!(l.index_of(Pos::new(4, 0, 0)), None);
        assert_eq!(l.index_of(Pos::new(0, -1, 0)), None);
    }

    #[test]
    fn sticker_lookup() {
        let l = Lattice::new(3).unwrap();
        let st = l.sticker(Location::new(2, 1, 2, Face::PZ)).unwrap();
        assert_eq!(st.curr(), Color::Red);
        assert!(l.sticker(Location::new(2, 1, 2, Face::NZ)).is_none());
        assert!(l.sticker(Location::new(5, 1, 2, Face::PZ)).is_none());
        assert!(l.is_exterior(Location::new(0, 0, 0, Face::NX)));
        assert!(!l.is_exterior(Location::new(1, 1, 1, Face::PX)));
    }

    #[test]
    fn clones_share_identity() {
        let l = Lattice::new(3).unwrap();
        let c = l.clone();
        assert_eq!(l.id(), c.id());
        let other = Lattice::new(3).unwrap();
        assert_ne!(l.id(), other.id());
    }

    #[test]
    fn with_stickers_is_copy_on_write() {
        let l = Lattice::new(3).unwrap();
        let loc = Location::new(0, 0, 2, Face::PZ);
        let next = l.with_stickers(&[loc], Sticker::flipped);
        assert_ne!(next.id(), l.id());
        assert_eq!(l.sticker(loc).unwrap().flips(), 0);
        assert_eq!(next.sticker(loc).unwrap().flips(), 1);
        assert!(l.is_pristine());
        assert!(!next.is_pristine());
    }

    #[test]
    fn face_locations_cover_the_face() {
        let l = Lattice::new(4).unwrap();
        for face in Face::ALL {
            let locs = l.face_locations(face);
            assert_eq!(locs.len(), 16);
            assert!(locs.iter().all(|loc| l.is_exterior(*loc)));
        }
    }

    #[test]
    fn compliance_fresh() {
        for size in 2..=5 {
            compliance::run_full_compliance(&Lattice::new(size).unwrap());
        }
    }
}
