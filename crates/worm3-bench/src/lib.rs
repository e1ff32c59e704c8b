//! Benchmark profiles for the WORM3 antipodal cube.
//!
//! Provides pre-built worlds for benchmarking and examples:
//!
//! - [`reference_profile`]: a chaos-level-4 [`WorldConfig`] for a given size
//! - [`unstable_world`]: a world with `n` random antipodal flips applied,
//!   so the chaos propagator has candidates
//! - [`worm_world`]: a world already in worm mode

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use worm3_core::Command;
use worm3_engine::{ConfigError, World, WorldConfig};
use worm3_worm::surface_cells;

/// Sizes every benchmark runs at.
pub const BENCH_SIZES: [u32; 2] = [3, 5];

/// Reference benchmark profile: chaos level 4, default worm tuning.
pub fn reference_profile(size: u32, seed: u64) -> WorldConfig {
    WorldConfig {
        size,
        seed,
        chaos_level: 4,
        ..WorldConfig::default()
    }
}

/// A reference world with `flips` distinct random surface cells flipped.
///
/// Cells whose partner was already flipped by an earlier pick flip back;
/// the flip count is exact, the number of unstable stickers is not.
pub fn unstable_world(size: u32, flips: usize, seed: u64) -> Result<World, ConfigError> {
    let mut world = World::new(reference_profile(size, seed))?;
    let mut cells = surface_cells(size);
    cells.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    for location in cells.into_iter().take(flips) {
        world = world.apply(Command::Flip { location }).world;
    }
    Ok(world)
}

/// A reference world in worm mode with chaos off.
///
/// On cubes too small for the worm game the world is returned without a
/// worm.
pub fn worm_world(size: u32, seed: u64) -> Result<World, ConfigError> {
    let world = World::new(WorldConfig {
        chaos_level: 0,
        ..reference_profile(size, seed)
    })?;
    Ok(world.apply(Command::EnterWormMode).world)
}
