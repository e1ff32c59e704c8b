//! WORM3: an N×N×N cube puzzle whose stickers are paired across the cube.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! WORM3 sub-crates. For most users, adding `worm3` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use worm3::prelude::*;
//!
//! let world = World::new(WorldConfig::default()).unwrap();
//!
//! // Flip a front sticker; its antipodal partner on the back flips too.
//! let t = world.apply(Command::Flip {
//!     location: Location::new(2, 1, 2, Face::PZ),
//! });
//! assert!(t.receipt.accepted);
//! let back = t.world.lattice().sticker(Location::new(0, 1, 0, Face::NZ)).unwrap();
//! assert_eq!(back.curr(), Color::Red);
//!
//! // Let chaos loose for one second of frames.
//! let mut world = t.world.apply(Command::SetChaosLevel { level: 2 }).world;
//! for _ in 0..60 {
//!     world = world.advance(1.0 / 60.0).world;
//! }
//! assert!(world.map().is_current_for(world.lattice()));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `worm3-core` | Geometry, colors, ids, commands, rejections |
//! | [`lattice`] | `worm3-lattice` | Lattice snapshots, rotation, grid ids, manifold map, flips, metrics |
//! | [`chaos`] | `worm3-chaos` | Chaos levels and the cascade propagator |
//! | [`worm`] | `worm3-worm` | Surface walk, seams, orbs and the worm game |
//! | [`engine`] | `worm3-engine` | `World`, config, clocks and frame metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`worm3-core`).
///
/// Lattice geometry, sticker colors, snapshot ids, the [`types::Command`]
/// vocabulary and the [`types::Rejection`] codes carried in receipts.
pub use worm3_core as types;

/// The cube lattice (`worm3-lattice`).
///
/// Copy-on-write [`lattice::Lattice`] snapshots, slice rotation,
/// [`lattice::GridId`] pairing, the [`lattice::ManifoldMap`] and
/// [`lattice::flip`].
pub use worm3_lattice as lattice;

/// Chaos cascades (`worm3-chaos`).
pub use worm3_chaos as chaos;

/// The surface worm (`worm3-worm`).
///
/// [`worm::next_surface_position`] walks the surface across seams;
/// [`worm::WormGame`] runs a game on top of it.
pub use worm3_worm as worm;

/// The world driver (`worm3-engine`).
pub use worm3_engine as engine;

/// Common imports for typical WORM3 usage.
///
/// ```rust
/// use worm3::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use worm3_core::{
        Axis, Color, Command, Face, Location, MoveCount, Pos, Receipt, Rejection, Turn, TurnSide,
    };

    // Lattice
    pub use worm3_lattice::{
        GridId, Instability, Lattice, LatticeError, LatticeMetrics, ManifoldMap, Sticker,
    };

    // Chaos
    pub use worm3_chaos::{ChaosEvent, ChaosLevel};

    // Worm
    pub use worm3_worm::{GameState, Heading, WormConfig, WormEvent, WormGame};

    // Engine
    pub use worm3_engine::{ConfigError, Event, FrameMetrics, Transition, World, WorldConfig};
}
