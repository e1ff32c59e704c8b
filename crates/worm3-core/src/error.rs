//! Command rejection reasons.
//!
//! A rejected command is not a process error: the world stays exactly as
//! it was and the [`Receipt`](crate::command::Receipt) carries one of these
//! codes. Most rejections are benign races, e.g. a twist requested for a
//! slice that no longer exists after a size change.

use crate::geometry::{Axis, Location};
use std::error::Error;
use std::fmt;

/// Why a command was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// `RotateSlice` named a slice outside `0..size`.
    SliceOutOfRange {
        /// Requested axis.
        axis: Axis,
        /// Requested slice index.
        index: i32,
        /// Current edge length.
        size: u32,
    },
    /// `Flip` named a slot that holds no sticker (out of range or interior).
    NoSticker {
        /// The requested location.
        location: Location,
    },
    /// `Reset` requested an unsupported edge length.
    InvalidSize {
        /// The requested size.
        size: u32,
    },
    /// `SetChaosLevel` requested a level above 4.
    InvalidChaosLevel {
        /// The requested level.
        level: u8,
    },
    /// A worm command arrived while worm mode is off.
    WormModeInactive,
    /// `EnterWormMode` while a worm game is already running.
    WormModeActive,
    /// Worm mode needs a cube of at least this size.
    WormSizeUnsupported {
        /// Current edge length.
        size: u32,
    },
    /// The command needs the worm game to be playing.
    WormNotPlaying,
    /// The rotation queue is at capacity.
    RotationQueueFull,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SliceOutOfRange { axis, index, size } => {
                write!(f, "{axis} slice {index} out of range for size {size}")
            }
            Self::NoSticker { location } => write!(f, "no sticker at {location}"),
            Self::InvalidSize { size } => write!(f, "unsupported cube size {size}"),
            Self::InvalidChaosLevel { level } => {
                write!(f, "chaos level {level} out of range 0..=4")
            }
            Self::WormModeInactive => write!(f, "worm mode is not active"),
            Self::WormModeActive => write!(f, "worm mode is already active"),
            Self::WormSizeUnsupported { size } => {
                write!(f, "worm mode needs size >= 3, got {size}")
            }
            Self::WormNotPlaying => write!(f, "worm game is not playing"),
            Self::RotationQueueFull => write!(f, "rotation queue full"),
        }
    }
}

impl Error for Rejection {}
