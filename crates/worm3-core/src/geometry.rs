//! Lattice geometry: positions, faces, slice axes and quarter turns.
//!
//! [`Face`] is the closed set of six outward directions ("direction keys").
//! Every table that depends on a face is an exhaustive `match`, so adding or
//! renaming a variant is a compile error everywhere it matters.

use crate::color::Color;
use std::fmt;
use std::ops::{Add, Neg};

/// Integer lattice coordinate `(x, y, z)`.
///
/// Signed so that stale or out-of-range command coordinates are
/// representable; the lattice rejects them rather than the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    /// Column coordinate.
    pub x: i32,
    /// Row coordinate.
    pub y: i32,
    /// Depth coordinate.
    pub z: i32,
}

impl Pos {
    /// Construct a position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate along `axis`.
    pub fn component(self, axis: Axis) -> i32 {
        match axis {
            Axis::Col => self.x,
            Axis::Row => self.y,
            Axis::Depth => self.z,
        }
    }

    /// Whether every coordinate lies in `0..size`.
    pub fn in_bounds(self, size: u32) -> bool {
        let s = size as i32;
        (0..s).contains(&self.x) && (0..s).contains(&self.y) && (0..s).contains(&self.z)
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Neg for Pos {
    type Output = Pos;

    fn neg(self) -> Pos {
        Pos::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Slice axis for a twist. `Col` slices share an x coordinate, `Row`
/// slices a y coordinate, `Depth` slices a z coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Rotation about the x axis.
    Col,
    /// Rotation about the y axis.
    Row,
    /// Rotation about the z axis.
    Depth,
}

impl Axis {
    /// All three axes in canonical order.
    pub const ALL: [Axis; 3] = [Axis::Col, Axis::Row, Axis::Depth];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Col => "col",
            Axis::Row => "row",
            Axis::Depth => "depth",
        };
        f.write_str(name)
    }
}

/// Direction of a 90° quarter turn: `Positive` is `+1`, `Negative` is `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Turn {
    /// `dir = +1`.
    Positive,
    /// `dir = -1`.
    Negative,
}

impl Turn {
    /// Both turn directions.
    pub const ALL: [Turn; 2] = [Turn::Positive, Turn::Negative];

    /// The integer sign of this turn.
    pub fn sign(self) -> i32 {
        match self {
            Turn::Positive => 1,
            Turn::Negative => -1,
        }
    }

    /// Parse `+1` / `-1`. Any other value is rejected.
    pub fn from_sign(sign: i32) -> Option<Turn> {
        match sign {
            1 => Some(Turn::Positive),
            -1 => Some(Turn::Negative),
            _ => None,
        }
    }

    /// The inverse quarter turn.
    pub fn reversed(self) -> Turn {
        match self {
            Turn::Positive => Turn::Negative,
            Turn::Negative => Turn::Positive,
        }
    }
}

/// One of the six outward face directions of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// +x (right, blue).
    PX,
    /// -x (left, green).
    NX,
    /// +y (top, white).
    PY,
    /// -y (bottom, yellow).
    NY,
    /// +z (front, red).
    PZ,
    /// -z (back, orange).
    NZ,
}

impl Face {
    /// All six faces in canonical order.
    pub const ALL: [Face; 6] = [Face::PX, Face::NX, Face::PY, Face::NY, Face::PZ, Face::NZ];

    /// Outward unit normal.
    pub fn normal(self) -> Pos {
        match self {
            Face::PX => Pos::new(1, 0, 0),
            Face::NX => Pos::new(-1, 0, 0),
            Face::PY => Pos::new(0, 1, 0),
            Face::NY => Pos::new(0, -1, 0),
            Face::PZ => Pos::new(0, 0, 1),
            Face::NZ => Pos::new(0, 0, -1),
        }
    }

    /// Inverse of [`normal`](Self::normal). `None` for non-unit vectors.
    pub fn from_normal(v: Pos) -> Option<Face> {
        match (v.x, v.y, v.z) {
            (1, 0, 0) => Some(Face::PX),
            (-1, 0, 0) => Some(Face::NX),
            (0, 1, 0) => Some(Face::PY),
            (0, -1, 0) => Some(Face::NY),
            (0, 0, 1) => Some(Face::PZ),
            (0, 0, -1) => Some(Face::NZ),
            _ => None,
        }
    }

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::PX => Face::NX,
            Face::NX => Face::PX,
            Face::PY => Face::NY,
            Face::NY => Face::PY,
            Face::PZ => Face::NZ,
            Face::NZ => Face::PZ,
        }
    }

    /// The axis this face is perpendicular to.
    pub fn axis(self) -> Axis {
        match self {
            Face::PX | Face::NX => Axis::Col,
            Face::PY | Face::NY => Axis::Row,
            Face::PZ | Face::NZ => Axis::Depth,
        }
    }

    /// The coordinate a cubie must have along [`axis`](Self::axis) to carry
    /// a sticker on this face of a `size`-cube.
    pub fn boundary(self, size: u32) -> i32 {
        match self {
            Face::PX | Face::PY | Face::PZ => size as i32 - 1,
            Face::NX | Face::NY | Face::NZ => 0,
        }
    }

    /// Whether a cubie at `pos` sits on this face.
    pub fn contains(self, pos: Pos, size: u32) -> bool {
        pos.component(self.axis()) == self.boundary(size)
    }

    /// The color every sticker created on this face starts with.
    pub fn home_color(self) -> Color {
        match self {
            Face::PZ => Color::Red,
            Face::NX => Color::Green,
            Face::PY => Color::White,
            Face::NZ => Color::Orange,
            Face::PX => Color::Blue,
            Face::NY => Color::Yellow,
        }
    }

    /// Two-letter direction key (`"PX"`, `"NZ"`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Face::PX => "PX",
            Face::NX => "NX",
            Face::PY => "PY",
            Face::NY => "NY",
            Face::PZ => "PZ",
            Face::NZ => "NZ",
        }
    }

    /// The face this direction points to after a quarter turn about `axis`.
    ///
    /// Matches the vector rotation `Col: (x, -d·z, d·y)`,
    /// `Row: (d·z, y, -d·x)`, `Depth: (-d·y, d·x, z)` with `d = turn.sign()`.
    pub fn rotated(self, axis: Axis, turn: Turn) -> Face {
        use Face::*;
        match (axis, turn, self) {
            (Axis::Col, _, PX) => PX,
            (Axis::Col, _, NX) => NX,
            (Axis::Col, Turn::Positive, PY) => PZ,
            (Axis::Col, Turn::Positive, PZ) => NY,
            (Axis::Col, Turn::Positive, NY) => NZ,
            (Axis::Col, Turn::Positive, NZ) => PY,
            (Axis::Col, Turn::Negative, PY) => NZ,
            (Axis::Col, Turn::Negative, NZ) => NY,
            (Axis::Col, Turn::Negative, NY) => PZ,
            (Axis::Col, Turn::Negative, PZ) => PY,

            (Axis::Row, _, PY) => PY,
            (Axis::Row, _, NY) => NY,
            (Axis::Row, Turn::Positive, PX) => NZ,
            (Axis::Row, Turn::Positive, NZ) => NX,
            (Axis::Row, Turn::Positive, NX) => PZ,
            (Axis::Row, Turn::Positive, PZ) => PX,
            (Axis::Row, Turn::Negative, PX) => PZ,
            (Axis::Row, Turn::Negative, PZ) => NX,
            (Axis::Row, Turn::Negative, NX) => NZ,
            (Axis::Row, Turn::Negative, NZ) => PX,

            (Axis::Depth, _, PZ) => PZ,
            (Axis::Depth, _, NZ) => NZ,
            (Axis::Depth, Turn::Positive, PX) => PY,
            (Axis::Depth, Turn::Positive, PY) => NX,
            (Axis::Depth, Turn::Positive, NX) => NY,
            (Axis::Depth, Turn::Positive, NY) => PX,
            (Axis::Depth, Turn::Negative, PX) => NY,
            (Axis::Depth, Turn::Negative, NY) => NX,
            (Axis::Depth, Turn::Negative, NX) => PY,
            (Axis::Depth, Turn::Negative, PY) => PX,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Address of one sticker slot: a cubie position plus the face it shows on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Cubie position.
    pub pos: Pos,
    /// Current face direction of the sticker.
    pub face: Face,
}

impl Location {
    /// Construct a location from raw coordinates.
    pub const fn new(x: i32, y: i32, z: i32, face: Face) -> Self {
        Self {
            pos: Pos::new(x, y, z),
            face,
        }
    }

    /// Whether this location is an exterior sticker slot of a `size`-cube.
    pub fn is_surface(self, size: u32) -> bool {
        self.pos.in_bounds(size) && self.face.contains(self.pos, size)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.pos.x, self.pos.y, self.pos.z, self.face
        )
    }
}
