//! Lattice fixtures.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use worm3_core::{Axis, Face, Location, Turn};
use worm3_lattice::{flip, Lattice, ManifoldMap};

/// One slice twist: axis, slice index, direction.
pub type Move = (Axis, i32, Turn);

/// ChaCha8 seeded from `seed`, the RNG used throughout the workspace.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A solved `size`-lattice with each location in `locations` flipped once,
/// in order. Repeating a location flips it again.
///
/// # Panics
///
/// If `size` is unsupported or a location holds no sticker.
pub fn lattice_with_flips(size: u32, locations: &[Location]) -> Lattice {
    let mut lattice = Lattice::new(size).unwrap();
    for &loc in locations {
        let map = ManifoldMap::build(&lattice);
        lattice = flip(&lattice, &map, loc)
            .unwrap_or_else(|e| panic!("fixture flip at {loc} failed: {e}"))
            .lattice;
    }
    lattice
}

/// `n` uniformly random twists valid for a `size`-cube.
pub fn random_moves<R: Rng + ?Sized>(size: u32, n: usize, rng: &mut R) -> Vec<Move> {
    (0..n)
        .map(|_| {
            let axis = *Axis::ALL.choose(rng).unwrap();
            let index = rng.random_range(0..size as i32);
            let turn = *Turn::ALL.choose(rng).unwrap();
            (axis, index, turn)
        })
        .collect()
}

/// A solved lattice scrambled by `n` seeded random twists, with the twists
/// applied.
pub fn scrambled(size: u32, n: usize, seed: u64) -> (Lattice, Vec<Move>) {
    let mut rng = seeded_rng(seed);
    let moves = random_moves(size, n, &mut rng);
    let mut lattice = Lattice::new(size).unwrap();
    for &(axis, index, turn) in &moves {
        lattice = lattice.rotate_slice(axis, index, turn).unwrap();
    }
    (lattice, moves)
}

/// Every exterior sticker slot of a `size`-cube, face by face.
pub fn all_surface_locations(size: u32) -> Vec<Location> {
    let lattice = Lattice::new(size).unwrap();
    Face::ALL
        .into_iter()
        .flat_map(|face| lattice.face_locations(face))
        .collect()
}
