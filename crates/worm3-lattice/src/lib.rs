//! The WORM3 cube lattice.
//!
//! This crate owns the puzzle state and the operations that produce new
//! states from it:
//!
//! - [`Lattice`]: immutable, copy-on-write snapshot of `size³` cubies and
//!   their stickers
//! - [`Lattice::rotate_slice`]: quarter-turn slice twists
//! - [`GridId`]: rotation-invariant sticker identity and antipodal pairing
//! - [`ManifoldMap`]: grid-id → current-location index, stamped with the
//!   snapshot it describes
//! - [`flip`]: toggle a sticker and its antipodal partner
//! - [`LatticeMetrics`]: flip, wormhole and entropy counts for the HUD
//!
//! # Snapshot discipline
//!
//! Every mutation returns a new [`Lattice`] with a fresh
//! [`SnapshotId`](worm3_core::SnapshotId). A [`ManifoldMap`] built from an
//! older snapshot is refused by [`flip`] with
//! [`LatticeError::StaleManifold`], so the map must be rebuilt after every
//! rotation or flip before it is consulted again.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod flip;
pub mod grid;
pub mod lattice;
pub mod manifold;
pub mod metrics;
pub mod rotation;
pub mod sticker;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::LatticeError;
pub use flip::{flip, FlipOutcome};
pub use grid::{grid_rc, GridId, ParseGridIdError};
pub use lattice::{Lattice, MAX_SIZE, MIN_SIZE};
pub use manifold::ManifoldMap;
pub use metrics::{Instability, LatticeMetrics};
pub use rotation::{reproject, rotate_location, rotate_pos};
pub use sticker::{Cubie, Sticker};
