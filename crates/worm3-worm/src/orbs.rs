//! Orb placement.

use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::Rng;
use worm3_core::{Face, Location, Pos};

/// Every exterior slot of a `size`-cube in x, y, z, face order.
pub fn surface_cells(size: u32) -> Vec<Location> {
    let s = size as i32;
    let mut out = Vec::with_capacity((6 * size * size) as usize);
    for x in 0..s {
        for y in 0..s {
            for z in 0..s {
                for face in Face::ALL {
                    let loc = Location {
                        pos: Pos::new(x, y, z),
                        face,
                    };
                    if loc.is_surface(size) {
                        out.push(loc);
                    }
                }
            }
        }
    }
    out
}

/// Up to `count` distinct surface cells not in `occupied`, chosen by a
/// seeded shuffle of the free cells.
///
/// Returns fewer than `count` only when the surface runs out.
pub fn spawn_orbs<R: Rng + ?Sized>(
    size: u32,
    count: usize,
    occupied: &[Location],
    rng: &mut R,
) -> IndexSet<Location> {
    let mut free: Vec<Location> = surface_cells(size)
        .into_iter()
        .filter(|loc| !occupied.contains(loc))
        .collect();
    free.shuffle(rng);
    free.truncate(count);
    free.into_iter().collect()
}
