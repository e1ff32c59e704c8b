//! Core types for the WORM3 antipodal cube.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the workspace: lattice
//! geometry ([`Pos`], [`Face`], [`Axis`], [`Turn`]), sticker [`Color`]s,
//! snapshot identifiers, commands and rejection codes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod command;
pub mod error;
pub mod geometry;
pub mod id;

pub use color::Color;
pub use command::{Command, Receipt, TurnSide};
pub use error::Rejection;
pub use geometry::{Axis, Face, Location, Pos, Turn};
pub use id::{MoveCount, SnapshotId};
