//! Engine driving the WORM3 antipodal cube.
//!
//! Provides the top-level [`World`]: the puzzle lattice, its manifold map,
//! the chaos propagator and the optional worm game, advanced by explicit
//! commands ([`World::apply`]) and by frame ticks ([`World::advance`]).
//! Both return a [`Transition`] rather than mutating in place.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod metrics;
pub mod world;

pub use clock::LogicalClock;
pub use config::{ConfigError, WorldConfig};
pub use metrics::FrameMetrics;
pub use world::{Event, Transition, World};
