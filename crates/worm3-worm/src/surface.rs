//! Walking on the cube surface.
//!
//! Each face has a head-on frame: looking at the face from outside the cube,
//! `Up`/`Down`/`Left`/`Right` map to fixed lattice axes. Stepping off a face
//! edge lands on the same cubie's sticker on the adjacent face, and the
//! heading is remapped so the walker keeps travelling straight across the
//! seam.

use std::fmt;
use worm3_core::{Axis, Face, Location, Pos, Turn, TurnSide};

/// Direction of travel in a face's head-on frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Toward the top of the face.
    Up,
    /// Toward the right of the face.
    Right,
    /// Toward the bottom of the face.
    Down,
    /// Toward the left of the face.
    Left,
}

impl Heading {
    /// All headings, clockwise from `Up`.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    fn index(self) -> usize {
        match self {
            Heading::Up => 0,
            Heading::Right => 1,
            Heading::Down => 2,
            Heading::Left => 3,
        }
    }

    fn from_index(i: usize) -> Heading {
        Self::ALL[i % 4]
    }

    /// Quarter turn clockwise.
    pub fn clockwise(self) -> Heading {
        Self::from_index(self.index() + 1)
    }

    /// Quarter turn counter-clockwise.
    pub fn counter_clockwise(self) -> Heading {
        Self::from_index(self.index() + 3)
    }

    /// The opposite heading.
    pub fn reversed(self) -> Heading {
        Self::from_index(self.index() + 2)
    }

    /// Steer: `Right` is clockwise, `Left` counter-clockwise.
    pub fn turned(self, side: TurnSide) -> Heading {
        match side {
            TurnSide::Right => self.clockwise(),
            TurnSide::Left => self.counter_clockwise(),
        }
    }

    /// The heading on the rotated face that points the same physical way
    /// after the sticker at `face` rides a quarter turn about `axis`.
    pub fn reprojected(self, face: Face, axis: Axis, turn: Turn) -> Heading {
        let travel = frame_delta(face, self);
        let Some(dir) = Face::from_normal(travel) else {
            return self;
        };
        let rotated = dir.rotated(axis, turn).normal();
        let new_face = face.rotated(axis, turn);
        Self::ALL
            .into_iter()
            .find(|h| frame_delta(new_face, *h) == rotated)
            .unwrap_or(self)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::Up => "up",
            Heading::Right => "right",
            Heading::Down => "down",
            Heading::Left => "left",
        };
        f.write_str(s)
    }
}

/// Lattice step for `heading` on `face`, seen head-on.
pub fn frame_delta(face: Face, heading: Heading) -> Pos {
    const PX: Pos = Pos::new(1, 0, 0);
    const NX: Pos = Pos::new(-1, 0, 0);
    const PY: Pos = Pos::new(0, 1, 0);
    const NY: Pos = Pos::new(0, -1, 0);
    const PZ: Pos = Pos::new(0, 0, 1);
    const NZ: Pos = Pos::new(0, 0, -1);
    // (up, down, left, right)
    let (up, down, left, right) = match face {
        Face::PZ => (PY, NY, NX, PX),
        Face::NZ => (PY, NY, PX, NX),
        Face::PX => (PY, NY, PZ, NZ),
        Face::NX => (PY, NY, NZ, PZ),
        Face::PY => (NZ, PZ, NX, PX),
        Face::NY => (PZ, NZ, NX, PX),
    };
    match heading {
        Heading::Up => up,
        Heading::Down => down,
        Heading::Left => left,
        Heading::Right => right,
    }
}

/// How the heading turns when crossing from one face onto an adjacent one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeamTurn {
    /// Heading unchanged.
    Straight,
    /// Heading reversed.
    HalfTurn,
    /// Heading turned a quarter clockwise.
    Clockwise,
    /// Heading turned a quarter counter-clockwise.
    CounterClockwise,
}

impl SeamTurn {
    /// Apply to a heading.
    pub fn apply(self, heading: Heading) -> Heading {
        match self {
            SeamTurn::Straight => heading,
            SeamTurn::HalfTurn => heading.reversed(),
            SeamTurn::Clockwise => heading.clockwise(),
            SeamTurn::CounterClockwise => heading.counter_clockwise(),
        }
    }
}

/// The heading remap for crossing from `from` onto `to`.
///
/// Derived from the face frames: after the crossing the walker travels
/// along `-normal(from)`. `None` for a face paired with itself or its
/// opposite, which share no edge.
pub fn seam(from: Face, to: Face) -> Option<SeamTurn> {
    use Face::*;
    use SeamTurn::*;
    let turn = match (from, to) {
        (PX, PY) => CounterClockwise,
        (PX, NY) => Clockwise,
        (PX, PZ) | (PX, NZ) => Straight,

        (NX, PY) => Clockwise,
        (NX, NY) => CounterClockwise,
        (NX, PZ) | (NX, NZ) => Straight,

        (PY, PX) => Clockwise,
        (PY, NX) => CounterClockwise,
        (PY, PZ) => Straight,
        (PY, NZ) => HalfTurn,

        (NY, PX) => CounterClockwise,
        (NY, NX) => Clockwise,
        (NY, PZ) => Straight,
        (NY, NZ) => HalfTurn,

        (PZ, PX) | (PZ, NX) | (PZ, PY) | (PZ, NY) => Straight,

        (NZ, PX) | (NZ, NX) => Straight,
        (NZ, PY) | (NZ, NY) => HalfTurn,

        (PX, PX) | (PX, NX) | (NX, NX) | (NX, PX) | (PY, PY) | (PY, NY) | (NY, NY)
        | (NY, PY) | (PZ, PZ) | (PZ, NZ) | (NZ, NZ) | (NZ, PZ) => return None,
    };
    Some(turn)
}

/// The next surface cell from `location` travelling `heading`, and the
/// heading to continue with there.
///
/// Within a face the heading is unchanged. Off an edge, the walker lands on
/// the same cubie's sticker on the face whose normal is the step direction,
/// and the heading is remapped by [`seam`]. `None` if `location` is not an
/// exterior slot of a `size`-cube.
pub fn next_surface_position(
    location: Location,
    heading: Heading,
    size: u32,
) -> Option<(Location, Heading)> {
    if !location.is_surface(size) {
        return None;
    }
    let delta = frame_delta(location.face, heading);
    let pos = location.pos + delta;
    if pos.in_bounds(size) {
        return Some((
            Location {
                pos,
                face: location.face,
            },
            heading,
        ));
    }
    let face = Face::from_normal(delta)?;
    let turn = seam(location.face, face)?;
    Some((
        Location {
            pos: location.pos,
            face,
        },
        turn.apply(heading),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn surface(size: u32) -> Vec<Location> {
        let s = size as i32;
        let mut out = Vec::new();
        for x in 0..s {
            for y in 0..s {
                for z in 0..s {
                    for face in Face::ALL {
                        let loc = Location {
                            pos: Pos::new(x, y, z),
                            face,
                        };
                        if loc.is_surface(size) {
                            out.push(loc);
                        }
                    }
                }
            }
        }
        out
    }

    // ── Frames ───────────────────────────────────────────────────

    #[test]
    fn frames_are_right_handed_seen_from_outside() {
        // up × right points into the cube for a head-on viewer.
        for face in Face::ALL {
            let u = frame_delta(face, Heading::Up);
            let r = frame_delta(face, Heading::Right);
            let cross = Pos::new(
                u.y * r.z - u.z * r.y,
                u.z * r.x - u.x * r.z,
                u.x * r.y - u.y * r.x,
            );
            assert_eq!(cross, -face.normal(), "{face}");
        }
    }

    #[test]
    fn opposite_headings_are_opposite_steps() {
        for face in Face::ALL {
            for h in Heading::ALL {
                assert_eq!(frame_delta(face, h.reversed()), -frame_delta(face, h));
                assert_eq!(frame_delta(face, h).component(face.axis()), 0);
            }
        }
    }

    #[test]
    fn turning_cycles() {
        assert_eq!(Heading::Up.turned(TurnSide::Right), Heading::Right);
        assert_eq!(Heading::Up.turned(TurnSide::Left), Heading::Left);
        for h in Heading::ALL {
            assert_eq!(h.clockwise().counter_clockwise(), h);
            assert_eq!(h.reversed().reversed(), h);
        }
    }

    // ── Seams ────────────────────────────────────────────────────

    #[test]
    fn seam_table_matches_geometry() {
        // Crossing from A onto B, the walker must travel along -normal(A).
        for from in Face::ALL {
            for h in Heading::ALL {
                let delta = frame_delta(from, h);
                let Some(to) = Face::from_normal(delta) else {
                    continue;
                };
                let turned = seam(from, to).unwrap().apply(h);
                assert_eq!(frame_delta(to, turned), -from.normal(), "{from}->{to} {h}");
            }
        }
    }

    #[test]
    fn seam_is_none_without_a_shared_edge() {
        for face in Face::ALL {
            assert_eq!(seam(face, face), None);
            assert_eq!(seam(face, face.opposite()), None);
        }
    }

    #[test]
    fn front_top_edge_up_lands_on_top_face() {
        let next = next_surface_position(Location::new(1, 2, 2, Face::PZ), Heading::Up, 3);
        assert_eq!(next, Some((Location::new(1, 2, 2, Face::PY), Heading::Up)));
    }

    #[test]
    fn back_top_edge_up_reverses_on_top_face() {
        let next = next_surface_position(Location::new(1, 2, 0, Face::NZ), Heading::Up, 3);
        assert_eq!(next, Some((Location::new(1, 2, 0, Face::PY), Heading::Down)));
    }

    #[test]
    fn in_face_step_keeps_heading() {
        let next = next_surface_position(Location::new(1, 1, 2, Face::PZ), Heading::Left, 3);
        assert_eq!(next, Some((Location::new(0, 1, 2, Face::PZ), Heading::Left)));
    }

    #[test]
    fn interior_slot_has_no_successor() {
        assert_eq!(
            next_surface_position(Location::new(1, 1, 1, Face::PZ), Heading::Up, 3),
            None
        );
    }

    #[test]
    fn straight_walk_circles_the_cube() {
        for size in 3..=5 {
            let start = Location::new(1, 1, size as i32 - 1, Face::PZ);
            let mut loc = start;
            let mut h = Heading::Up;
            for _ in 0..4 * size {
                (loc, h) = next_surface_position(loc, h, size).unwrap();
            }
            assert_eq!((loc, h), (start, Heading::Up));
        }
    }

    #[test]
    fn every_step_is_reversible() {
        for size in 3..=5 {
            for loc in surface(size) {
                for h in Heading::ALL {
                    let (next, nh) = next_surface_position(loc, h, size).unwrap();
                    assert!(next.is_surface(size));
                    let (back, bh) = next_surface_position(next, nh.reversed(), size).unwrap();
                    assert_eq!((back, bh.reversed()), (loc, h), "{loc} {h} size {size}");
                }
            }
        }
    }

    // ── Reprojection ─────────────────────────────────────────────

    #[test]
    fn reprojected_heading_points_the_same_way_physically() {
        for face in Face::ALL {
            for h in Heading::ALL {
                for axis in Axis::ALL {
                    for turn in Turn::ALL {
                        let nh = h.reprojected(face, axis, turn);
                        let before = Face::from_normal(frame_delta(face, h)).unwrap();
                        let after = frame_delta(face.rotated(axis, turn), nh);
                        assert_eq!(after, before.rotated(axis, turn).normal());
                    }
                }
            }
        }
    }

    proptest! {
        #[test]
        fn random_walks_stay_on_the_surface(
            size in 3u32..=5,
            turns in prop::collection::vec(0u8..3, 1..200),
        ) {
            let mut loc = Location::new(1, 1, size as i32 - 1, Face::PZ);
            let mut h = Heading::Up;
            for t in turns {
                h = match t {
                    0 => h,
                    1 => h.turned(TurnSide::Left),
                    _ => h.turned(TurnSide::Right),
                };
                let next = next_surface_position(loc, h, size);
                prop_assert!(next.is_some());
                (loc, h) = next.unwrap();
                prop_assert!(loc.is_surface(size));
            }
        }
    }
}
