//! Antipodal flip.

use crate::error::LatticeError;
use crate::lattice::Lattice;
use crate::manifold::ManifoldMap;
use crate::sticker::Sticker;
use worm3_core::Location;

/// Result of a successful flip.
#[derive(Clone, Debug)]
pub struct FlipOutcome {
    /// The replacement snapshot.
    pub lattice: Lattice,
    /// The slot that was flipped.
    pub target: Location,
    /// The partner slot flipped alongside it. `None` if the partner could
    /// not be resolved, in which case only `target` changed.
    pub partner: Option<Location>,
}

/// Flip the sticker at `location` and its antipodal partner.
///
/// Both stickers switch to the opposite color and gain one flip. `map` must
/// describe `lattice` exactly; a map built from any other snapshot is
/// refused with `StaleManifold` before anything is read. An empty slot is
/// `NoSticker`. The input lattice is untouched either way.
///
/// # Examples
///
/// ```
/// use worm3_core::{Color, Face, Location};
/// use worm3_lattice::{flip, Lattice, ManifoldMap};
///
/// let lattice = Lattice::new(3).unwrap();
/// let map = ManifoldMap::build(&lattice);
/// let out = flip(&lattice, &map, Location::new(2, 1, 2, Face::PZ)).unwrap();
///
/// let front = out.lattice.sticker(out.target).unwrap();
/// assert_eq!(front.curr(), Color::Orange);
/// assert_eq!(out.partner, Some(Location::new(0, 1, 0, Face::NZ)));
/// ```
pub fn flip(
    lattice: &Lattice,
    map: &ManifoldMap,
    location: Location,
) -> Result<FlipOutcome, LatticeError> {
    let partner = map
        .antipode_of(lattice, location)?
        .filter(|p| *p != location);
    let lattice = match partner {
        Some(p) => lattice.with_stickers(&[location, p], Sticker::flipped),
        None => {
            log::warn!("no antipodal partner for {location}; flipping it alone");
            lattice.with_stickers(&[location], Sticker::flipped)
        }
    };
    Ok(FlipOutcome {
        lattice,
        target: location,
        partner,
    })
}
