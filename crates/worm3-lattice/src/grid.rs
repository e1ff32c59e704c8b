//! Manifold grid indexing.
//!
//! Every sticker gets a face-agnostic `(row, col)` computed purely from its
//! creation-time identity. Each face is read "head-on" from outside the
//! cube, so index `1` is the top-left cell of every face. Two stickers are
//! antipodal partners iff their home colors are opposite and their indices
//! match. Nothing here looks at the current position of a sticker, which is
//! what makes the pairing survive any sequence of twists.

use crate::sticker::Sticker;
use std::fmt;
use std::str::FromStr;
use worm3_core::{Color, Face, Pos};

/// Canonical `(row, col)` of a sticker created at `orig_pos` on `orig_face`.
///
/// Both values are in `0..size` for any position on that face.
pub fn grid_rc(orig_pos: Pos, orig_face: Face, size: u32) -> (u32, u32) {
    let m = size as i32 - 1;
    let Pos { x, y, z } = orig_pos;
    let (r, c) = match orig_face {
        // Front, viewed from +z.
        Face::PZ => (m - y, x),
        // Back, viewed from -z: mirrored horizontally.
        Face::NZ => (m - y, m - x),
        // Right, viewed from +x.
        Face::PX => (m - y, m - z),
        // Left, viewed from -x.
        Face::NX => (m - y, z),
        // Top, looking down from +y.
        Face::PY => (z, x),
        // Bottom, looking up from -y.
        Face::NY => (m - z, x),
    };
    (r as u32, c as u32)
}

/// Stable, rotation-invariant identifier of a sticker.
///
/// Displayed as `"{color}-{index:03}"`, e.g. `"1-006"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId {
    /// Home color of the sticker's face.
    pub color: Color,
    /// Manifold index, `1..=size²`.
    pub index: u32,
}

impl GridId {
    /// Compute the id for a sticker on a `size`-cube.
    pub fn of(sticker: &Sticker, size: u32) -> GridId {
        let (r, c) = grid_rc(sticker.orig_pos(), sticker.orig_face(), size);
        GridId {
            color: sticker.orig(),
            index: r * size + c + 1,
        }
    }

    /// Id of the antipodal partner: opposite color, same index.
    pub fn antipode(self) -> GridId {
        GridId {
            color: self.color.opposite(),
            index: self.index,
        }
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:03}", self.color.code(), self.index)
    }
}

/// Failure to parse a [`GridId`] from its display form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseGridIdError {
    input: String,
}

impl fmt::Display for ParseGridIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid grid id '{}'", self.input)
    }
}

impl std::error::Error for ParseGridIdError {}

impl FromStr for GridId {
    type Err = ParseGridIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseGridIdError {
            input: s.to_string(),
        };
        let (color, index) = s.split_once('-').ok_or_else(err)?;
        let color = color
            .parse::<u8>()
            .ok()
            .and_then(Color::from_code)
            .ok_or_else(err)?;
        let index = index.parse::<u32>().map_err(|_| err())?;
        if index == 0 {
            return Err(err());
        }
        Ok(GridId { color, index })
    }
}
