//! Quarter-turn slice rotation.
//!
//! Positions rotate about the cube center `(size-1)/2`. The integer forms
//! below are exact for odd and even sizes alike: with `m = size - 1`, a
//! centered coordinate `c - m/2` maps back as `m - c` or `c`, so no
//! half-integers appear.

use crate::error::LatticeError;
use crate::lattice::Lattice;
use worm3_core::{Axis, Location, Pos, Turn};

/// Rotate a cubie position a quarter turn about `axis`.
///
/// Coordinates along `axis` are unchanged; `pos` need not be in the slice.
pub fn rotate_pos(pos: Pos, axis: Axis, turn: Turn, size: u32) -> Pos {
    let m = size as i32 - 1;
    let Pos { x, y, z } = pos;
    match (axis, turn) {
        (Axis::Col, Turn::Positive) => Pos::new(x, m - z, y),
        (Axis::Col, Turn::Negative) => Pos::new(x, z, m - y),
        (Axis::Row, Turn::Positive) => Pos::new(z, y, m - x),
        (Axis::Row, Turn::Negative) => Pos::new(m - z, y, x),
        (Axis::Depth, Turn::Positive) => Pos::new(m - y, x, z),
        (Axis::Depth, Turn::Negative) => Pos::new(y, m - x, z),
    }
}

/// Rotate a sticker slot: position and face key transform together.
pub fn rotate_location(location: Location, axis: Axis, turn: Turn, size: u32) -> Location {
    Location {
        pos: rotate_pos(location.pos, axis, turn, size),
        face: location.face.rotated(axis, turn),
    }
}

/// Where a slot ends up after twisting slice `index` of `axis`.
///
/// Slots outside the slice are returned unchanged. Anything that rides the
/// cube (worm segments, orbs) is re-projected through this function so it
/// follows exactly the transform the lattice applies.
pub fn reproject(location: Location, axis: Axis, index: i32, turn: Turn, size: u32) -> Location {
    if location.pos.component(axis) == index {
        rotate_location(location, axis, turn, size)
    } else {
        location
    }
}

impl Lattice {
    /// Twist slice `index` of `axis` by a quarter turn.
    ///
    /// Builds the replacement snapshot from `self` in one pass: every cubie
    /// in the slice moves to its rotated position and every sticker on it
    /// has its face key rotated. Sticker identity, color and flip count
    /// pass through untouched.
    ///
    /// Returns `Err(LatticeError::SliceOutOfRange)` for an index outside
    /// `0..size`; `self` is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use worm3_core::{Axis, Face, Location, Turn};
    /// use worm3_lattice::Lattice;
    ///
    /// let solved = Lattice::new(3).unwrap();
    /// let twisted = solved.rotate_slice(Axis::Col, 2, Turn::Positive).unwrap();
    /// // A white sticker from the top edge now faces front.
    /// let st = twisted.sticker(Location::new(2, 1, 2, Face::PZ)).unwrap();
    /// assert_eq!(st.orig_face(), Face::PY);
    /// ```
    pub fn rotate_slice(&self, axis: Axis, index: i32, turn: Turn) -> Result<Lattice, LatticeError> {
        let size = self.size();
        if !(0..size as i32).contains(&index) {
            return Err(LatticeError::SliceOutOfRange { axis, index, size });
        }

        let prior = self.cubies();
        let mut next = prior.to_vec();
        for (i, cubie) in prior.iter().enumerate() {
            let pos = self.pos_of(i);
            if pos.component(axis) != index {
                continue;
            }
            let dest = rotate_pos(pos, axis, turn, size);
            // In-slice rotation is a bijection on in-bounds positions.
            if let Some(j) = self.index_of(dest) {
                next[j] = cubie.refaced(|face| face.rotated(axis, turn));
            }
        }
        log::trace!("rotate {axis} slice {index} {turn:?} (size {size})");
        Ok(Lattice::from_cubies(size, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::grid::GridId;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use worm3_core::Face;

    fn locations_by_id(l: &Lattice) -> HashMap<GridId, Location> {
        l.stickers()
            .map(|(loc, st)| (GridId::of(st, l.size()), loc))
            .collect()
    }

    fn same_layout(a: &Lattice, b: &Lattice) -> bool {
        locations_by_id(a) == locations_by_id(b)
    }

    #[test]
    fn rotate_pos_keeps_axis_coordinate() {
        for size in 3..=5 {
            let s = size as i32;
            for axis in Axis::ALL {
                for turn in Turn::ALL {
                    for x in 0..s {
                        for y in 0..s {
                            for z in 0..s {
                                let p = Pos::new(x, y, z);
                                let r = rotate_pos(p, axis, turn, size);
                                assert_eq!(r.component(axis), p.component(axis));
                                assert!(r.in_bounds(size));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn rotated_surface_slots_stay_on_the_surface() {
        for size in 2..=5 {
            let l = Lattice::new(size).unwrap();
            for (loc, _) in l.stickers() {
                for axis in Axis::ALL {
                    for turn in Turn::ALL {
                        assert!(rotate_location(loc, axis, turn, size).is_surface(size));
                    }
                }
            }
        }
    }

    #[test]
    fn inverse_turn_restores_layout() {
        for size in 3..=5 {
            let l = Lattice::new(size).unwrap();
            for axis in Axis::ALL {
                for index in 0..size as i32 {
                    for turn in Turn::ALL {
                        let back = l
                            .rotate_slice(axis, index, turn)
                            .unwrap()
                            .rotate_slice(axis, index, turn.reversed())
                            .unwrap();
                        assert!(same_layout(&l, &back), "{axis} {index} {turn:?} size {size}");
                    }
                }
            }
        }
    }

    #[test]
    fn four_quarter_turns_restore_layout() {
        let l = Lattice::new(4).unwrap();
        let mut r = l.clone();
        for _ in 0..4 {
            r = r.rotate_slice(Axis::Depth, 1, Turn::Positive).unwrap();
        }
        assert!(same_layout(&l, &r));
        assert_ne!(l.id(), r.id());
    }

    #[test]
    fn twist_moves_only_the_slice() {
        let l = Lattice::new(3).unwrap();
        let r = l.rotate_slice(Axis::Row, 0, Turn::Positive).unwrap();
        for (loc, st) in r.stickers() {
            if loc.pos.y != 0 {
                assert_eq!(st.orig_pos(), loc.pos);
                assert_eq!(st.orig_face(), loc.face);
            }
        }
    }

    #[test]
    fn front_face_turns_clockwise_onto_right_face() {
        // Row +1 carries PZ stickers to PX.
        let l = Lattice::new(3).unwrap();
        let r = l.rotate_slice(Axis::Row, 1, Turn::Positive).unwrap();
        let st = r.sticker(Location::new(2, 1, 1, Face::PX)).unwrap();
        assert_eq!(st.orig_face(), Face::PZ);
        assert_eq!(st.orig_pos(), Pos::new(1, 1, 2));
    }

    #[test]
    fn out_of_range_slice_is_rejected() {
        let l = Lattice::new(3).unwrap();
        assert_eq!(
            l.rotate_slice(Axis::Col, 3, Turn::Positive).unwrap_err(),
            LatticeError::SliceOutOfRange {
                axis: Axis::Col,
                index: 3,
                size: 3
            }
        );
        assert!(l.rotate_slice(Axis::Row, -1, Turn::Negative).is_err());
    }

    #[test]
    fn reproject_ignores_other_slices() {
        let loc = Location::new(0, 2, 2, Face::PZ);
        assert_eq!(reproject(loc, Axis::Col, 1, Turn::Positive, 3), loc);
        assert_eq!(
            reproject(loc, Axis::Col, 0, Turn::Positive, 3),
            rotate_location(loc, Axis::Col, Turn::Positive, 3)
        );
    }

    #[test]
    fn reproject_follows_the_sticker() {
        let l = Lattice::new(5).unwrap();
        for (loc, st) in l.stickers() {
            for axis in Axis::ALL {
                let index = loc.pos.component(axis);
                let r = l.rotate_slice(axis, index, Turn::Negative).unwrap();
                let moved = reproject(loc, axis, index, Turn::Negative, 5);
                assert_eq!(r.sticker(moved), Some(st));
            }
        }
    }

    fn arb_move(size: u32) -> impl Strategy<Value = (Axis, i32, Turn)> {
        (
            prop_oneof![Just(Axis::Col), Just(Axis::Row), Just(Axis::Depth)],
            0..size as i32,
            prop_oneof![Just(Turn::Positive), Just(Turn::Negative)],
        )
    }

    proptest! {
        #[test]
        fn sequences_preserve_compliance_and_reverse(
            size in 3u32..=5,
            moves in proptest::collection::vec(arb_move(3), 1..20),
        ) {
            let l = Lattice::new(size).unwrap();
            let mut r = l.clone();
            for &(axis, index, turn) in &moves {
                r = r.rotate_slice(axis, index, turn).unwrap();
            }
            compliance::run_full_compliance(&r);
            for &(axis, index, turn) in moves.iter().rev() {
                r = r.rotate_slice(axis, index, turn.reversed()).unwrap();
            }
            prop_assert!(same_layout(&l, &r));
        }
    }
}
