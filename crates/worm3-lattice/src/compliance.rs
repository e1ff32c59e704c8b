//! Lattice invariant checks.
//!
//! Shared by the unit tests of every module that produces a new snapshot
//! (construction, rotation, flip). Each helper panics with a description
//! of the first violation it finds.

use crate::grid::GridId;
use crate::lattice::Lattice;
use crate::manifold::ManifoldMap;
use std::collections::HashSet;

/// Assert the lattice carries exactly `6·size²` stickers.
pub fn assert_sticker_count(lattice: &Lattice) {
    let size = lattice.size() as usize;
    assert_eq!(
        lattice.sticker_count(),
        6 * size * size,
        "sticker count wrong for size {size}"
    );
}

/// Assert every sticker sits on an exterior slot.
pub fn assert_stickers_on_surface(lattice: &Lattice) {
    for (loc, _) in lattice.stickers() {
        assert!(
            loc.is_surface(lattice.size()),
            "sticker at {loc} is not on the surface"
        );
    }
}

/// Assert grid ids are unique and within `1..=size²`.
pub fn assert_grid_ids_unique(lattice: &Lattice) {
    let size = lattice.size();
    let mut seen = HashSet::new();
    for (loc, st) in lattice.stickers() {
        let id = GridId::of(st, size);
        assert!(seen.insert(id), "duplicate grid id {id} at {loc}");
        assert!(
            (1..=size * size).contains(&id.index),
            "grid id {id} out of range"
        );
    }
}

/// Assert every id's antipode is present.
pub fn assert_antipodes_resolve(lattice: &Lattice) {
    let map = ManifoldMap::build(lattice);
    for (id, loc) in map.iter() {
        assert!(
            map.get(id.antipode()).is_some(),
            "no partner for {id} at {loc}"
        );
    }
}

/// Assert a sticker is off its home color iff its flip count is odd.
pub fn assert_flip_parity(lattice: &Lattice) {
    for (loc, st) in lattice.stickers() {
        assert_eq!(
            st.flips() % 2 == 1,
            st.is_flipped(),
            "flip count {} disagrees with color at {loc}",
            st.flips()
        );
    }
}

/// Run all lattice checks.
pub fn run_full_compliance(lattice: &Lattice) {
    assert_sticker_count(lattice);
    assert_stickers_on_surface(lattice);
    assert_grid_ids_unique(lattice);
    assert_antipodes_resolve(lattice);
    assert_flip_parity(lattice);
}
