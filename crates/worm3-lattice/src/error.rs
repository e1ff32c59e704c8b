//! Error types for lattice operations.

use std::fmt;

use worm3_core::{Axis, Location, Rejection, SnapshotId};

/// Errors arising from lattice construction, rotation and flips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Edge length outside the supported range.
    InvalidSize {
        /// The requested size.
        size: u32,
        /// Smallest supported size.
        min: u32,
        /// Largest supported size.
        max: u32,
    },
    /// Slice index outside `0..size`.
    SliceOutOfRange {
        /// Slice axis.
        axis: Axis,
        /// Offending index.
        index: i32,
        /// Edge length.
        size: u32,
    },
    /// No sticker at the given slot.
    NoSticker {
        /// The requested location.
        location: Location,
    },
    /// The manifold map was built from a different snapshot.
    StaleManifold {
        /// Snapshot the map was built from.
        map: SnapshotId,
        /// Snapshot the caller passed in.
        lattice: SnapshotId,
    },
}

impl LatticeError {
    /// The command-level rejection for this error, if it is one a caller
    /// can provoke with bad input. `StaleManifold` is an internal
    /// sequencing fault and has no rejection code.
    pub fn rejection(&self) -> Option<Rejection> {
        match *self {
            Self::InvalidSize { size, .. } => Some(Rejection::InvalidSize { size }),
            Self::SliceOutOfRange { axis, index, size } => {
                Some(Rejection::SliceOutOfRange { axis, index, size })
            }
            Self::NoSticker { location } => Some(Rejection::NoSticker { location }),
            Self::StaleManifold { .. } => None,
        }
    }
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, min, max } => {
                write!(f, "cube size {size} outside supported range {min}..={max}")
            }
            Self::SliceOutOfRange { axis, index, size } => {
                write!(f, "{axis} slice {index} out of range for size {size}")
            }
            Self::NoSticker { location } => write!(f, "no sticker at {location}"),
            Self::StaleManifold { map, lattice } => write!(
                f,
                "manifold map built from snapshot {map} used with snapshot {lattice}"
            ),
        }
    }
}

impl std::error::Error for LatticeError {}
