//! Test fixtures for WORM3 development.
//!
//! Builders for lattices in known states (flipped stickers, seeded
//! scrambles) and the seeded RNG every test should use in place of an
//! entropy source.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    all_surface_locations, lattice_with_flips, random_moves, scrambled, seeded_rng, Move,
};
