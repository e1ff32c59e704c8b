//! Stochastic reflip cascade.
//!
//! Each tick picks one unstable exterior sticker as the source, gives it a
//! chance to flip again (hotter the more it has been visited), then gives
//! each of its face neighbours an independent chance to flip. Every flip is
//! a full antipodal [`flip`], and the manifold map is rebuilt after each one
//! so later draws in the same tick resolve partners against the current
//! snapshot.
//!
//! The RNG is injected. Draw order is fixed (source pick, self draw, then
//! one draw per neighbour in [`face_neighbours`] order), so a seeded RNG
//! replays a tick exactly.
//!
//! Constructed via [`ChaosPropagator::new`] or [`ChaosPropagator::builder`].

use crate::level::ChaosLevel;
use rand::Rng;
use smallvec::SmallVec;
use worm3_core::{Axis, Face, Location, Pos};
use worm3_lattice::{flip, Lattice, LatticeError, ManifoldMap};

/// Default scale applied to the base probability for neighbour reflips.
pub const DEFAULT_NEIGHBOUR_FACTOR: f64 = 0.6;

/// An unstable exterior sticker eligible to seed a cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Where the sticker sits.
    pub location: Location,
    /// Its flip count.
    pub flips: u32,
}

/// Something that happened during a chaos tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChaosEvent {
    /// The source sticker flipped again.
    SelfReflip {
        /// Source location.
        location: Location,
    },
    /// A neighbour of the source flipped.
    Cascade {
        /// Source location.
        from: Location,
        /// Neighbour that flipped.
        to: Location,
    },
}

/// Result of one chaos tick.
#[derive(Clone, Debug)]
pub struct ChaosOutcome {
    /// Lattice after the tick. Same snapshot as the input if nothing flipped.
    pub lattice: Lattice,
    /// Map describing `lattice`.
    pub map: ManifoldMap,
    /// The source chosen this tick, if there were any candidates.
    pub source: Option<Location>,
    /// Flips performed, in order.
    pub events: Vec<ChaosEvent>,
}

impl ChaosOutcome {
    fn unchanged(lattice: &Lattice, map: &ManifoldMap) -> Self {
        Self {
            lattice: lattice.clone(),
            map: map.clone(),
            source: None,
            events: Vec::new(),
        }
    }

    /// Whether the tick flipped anything.
    pub fn changed(&self) -> bool {
        !self.events.is_empty()
    }

    fn apply_flip(&mut self, location: Location) -> Result<(), LatticeError> {
        let flipped = flip(&self.lattice, &self.map, location)?;
        self.map = ManifoldMap::build(&flipped.lattice);
        self.lattice = flipped.lattice;
        Ok(())
    }
}

/// The chaos cascade for one intensity level.
#[derive(Clone, Debug)]
pub struct ChaosPropagator {
    level: ChaosLevel,
    neighbour_factor: f64,
}

/// Builder for [`ChaosPropagator`].
///
/// Required field: `level`.
pub struct ChaosPropagatorBuilder {
    level: Option<u8>,
    neighbour_factor: f64,
}

impl ChaosPropagator {
    /// A propagator at `level` with the default neighbour factor.
    pub fn new(level: ChaosLevel) -> Self {
        Self {
            level,
            neighbour_factor: DEFAULT_NEIGHBOUR_FACTOR,
        }
    }

    /// Create a new builder.
    pub fn builder() -> ChaosPropagatorBuilder {
        ChaosPropagatorBuilder {
            level: None,
            neighbour_factor: DEFAULT_NEIGHBOUR_FACTOR,
        }
    }

    /// Configured level.
    pub fn level(&self) -> ChaosLevel {
        self.level
    }

    /// Probability the source reflips: `base · ln(flips + 1)`.
    ///
    /// May exceed 1, in which case the reflip always happens.
    pub fn self_probability(&self, flips: u32) -> f64 {
        self.level.base_probability() * (f64::from(flips) + 1.0).ln()
    }

    /// Probability each neighbour reflips: `base · neighbour_factor`.
    pub fn neighbour_probability(&self) -> f64 {
        self.level.base_probability() * self.neighbour_factor
    }

    /// Unstable exterior stickers (`flips > 0`, off their home color), in
    /// lattice order.
    pub fn candidates(lattice: &Lattice) -> Vec<Candidate> {
        lattice
            .stickers()
            .filter(|(loc, st)| st.is_unstable() && loc.is_surface(lattice.size()))
            .map(|(location, st)| Candidate {
                location,
                flips: st.flips(),
            })
            .collect()
    }

    /// Run one tick.
    ///
    /// A no-op (same snapshot, no RNG draws) when the level is off or there
    /// are no candidates. Fails only with `StaleManifold` if `map` does not
    /// describe `lattice`.
    pub fn step<R: Rng + ?Sized>(
        &self,
        lattice: &Lattice,
        map: &ManifoldMap,
        rng: &mut R,
    ) -> Result<ChaosOutcome, LatticeError> {
        map.ensure_current(lattice)?;
        if !self.level.is_active() {
            return Ok(ChaosOutcome::unchanged(lattice, map));
        }
        let candidates = Self::candidates(lattice);
        if candidates.is_empty() {
            return Ok(ChaosOutcome::unchanged(lattice, map));
        }

        let src = candidates[rng.random_range(0..candidates.len())];
        let mut out = ChaosOutcome::unchanged(lattice, map);
        out.source = Some(src.location);

        let p_self = self.self_probability(src.flips);
        let roll: f64 = rng.random();
        log::trace!(
            "chaos {}: source {} (flips {}), self roll {roll:.3} vs {p_self:.3}",
            self.level,
            src.location,
            src.flips
        );
        if roll < p_self {
            out.apply_flip(src.location)?;
            out.events.push(ChaosEvent::SelfReflip {
                location: src.location,
            });
        }

        let p_n = self.neighbour_probability();
        for to in face_neighbours(src.location, lattice.size()) {
            let roll: f64 = rng.random();
            log::trace!("chaos {}: neighbour {to} roll {roll:.3} vs {p_n:.3}", self.level);
            if roll < p_n {
                out.apply_flip(to)?;
                out.events.push(ChaosEvent::Cascade {
                    from: src.location,
                    to,
                });
            }
        }
        Ok(out)
    }
}

impl ChaosPropagatorBuilder {
    /// Set the chaos level, `0..=4`.
    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the neighbour factor (default: 0.6). Must be finite and `>= 0`.
    pub fn neighbour_factor(mut self, factor: f64) -> Self {
        self.neighbour_factor = factor;
        self
    }

    /// Build the propagator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `level` is not set or above 4
    /// - `neighbour_factor` is negative or NaN
    pub fn build(self) -> Result<ChaosPropagator, String> {
        let raw = self.level.ok_or_else(|| "level is required".to_string())?;
        let level =
            ChaosLevel::new(raw).ok_or_else(|| format!("level must be 0..=4, got {raw}"))?;
        if !self.neighbour_factor.is_finite() || self.neighbour_factor < 0.0 {
            return Err(format!(
                "neighbour_factor must be finite and >= 0, got {}",
                self.neighbour_factor
            ));
        }
        Ok(ChaosPropagator {
            level,
            neighbour_factor: self.neighbour_factor,
        })
    }
}

/// The in-face axes of `face`, in the order neighbours are visited.
fn in_face_axes(face: Face) -> [Axis; 2] {
    match face.axis() {
        Axis::Col => [Axis::Row, Axis::Depth],
        Axis::Row => [Axis::Col, Axis::Depth],
        Axis::Depth => [Axis::Col, Axis::Row],
    }
}

fn step_along(axis: Axis, d: i32) -> Pos {
    match axis {
        Axis::Col => Pos::new(d, 0, 0),
        Axis::Row => Pos::new(0, d, 0),
        Axis::Depth => Pos::new(0, 0, d),
    }
}

/// Same-face grid neighbours of `location`: ±1 along each in-face axis,
/// dropping any that fall off the face. At most four.
pub fn face_neighbours(location: Location, size: u32) -> SmallVec<[Location; 4]> {
    let mut out = SmallVec::new();
    for axis in in_face_axes(location.face) {
        for d in [-1, 1] {
            let pos = location.pos + step_along(axis, d);
            if pos.in_bounds(size) {
                out.push(Location {
                    pos,
                    face: location.face,
                });
            }
        }
    }
    out
}
