//! Chaos cascades for the WORM3 antipodal cube.
//!
//! While chaos is on, unstable stickers (flipped at least once and still
//! off their home color) periodically reflip and spread flips to their
//! face neighbours.
//!
//! - [`ChaosLevel`]: intensity `0..=4`, mapping to a tick period and a base
//!   probability
//! - [`ChaosPropagator`]: one tick of the cascade, driven by an injected RNG

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod level;
pub mod propagator;

pub use level::ChaosLevel;
pub use propagator::{
    face_neighbours, Candidate, ChaosEvent, ChaosOutcome, ChaosPropagator,
    ChaosPropagatorBuilder, DEFAULT_NEIGHBOUR_FACTOR,
};
