//! The WORM3 worm game.
//!
//! A worm crawls over the cube surface one sticker per move. Stepping off a
//! face edge carries it onto the adjacent face with its heading remapped;
//! landing on a flipped sticker warps it to that sticker's antipodal
//! partner. It grows by eating orbs and dies on self-collision.
//!
//! - [`surface`]: head-on face frames, seam remapping, [`next_surface_position`]
//! - [`WormGame`]: the game state machine
//! - [`WormConfig`]: tuning and validation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod game;
pub mod orbs;
pub mod surface;

pub use config::{WormConfig, WormConfigError, MIN_WORM_SIZE};
pub use game::{DeathCause, GameState, QueuedRotation, Segment, WormEvent, WormGame};
pub use orbs::{spawn_orbs, surface_cells};
pub use surface::{frame_delta, next_surface_position, seam, Heading, SeamTurn};
