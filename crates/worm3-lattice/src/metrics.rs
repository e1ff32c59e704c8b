//! Whole-lattice statistics for the HUD.
//!
//! [`LatticeMetrics`] summarises how far a snapshot has drifted from its
//! solved colors; [`Instability`] buckets that drift into four bands.

use crate::lattice::Lattice;
use std::fmt;

/// Counts taken over every exterior sticker of one snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatticeMetrics {
    /// Sum of every sticker's flip counter.
    pub total_flips: u64,
    /// Stickers whose current color differs from their original color.
    pub off_original: u32,
    /// Stickers that have flipped at least once and still show the
    /// opposite color.
    pub wormholes: u32,
    /// Exterior stickers counted.
    pub stickers: u32,
    /// `round(100 · off_original / stickers)`.
    pub entropy_pct: u32,
}

impl LatticeMetrics {
    /// Measure `lattice`.
    pub fn measure(lattice: &Lattice) -> Self {
        let mut m = Self::default();
        for (_, st) in lattice.stickers() {
            m.stickers += 1;
            m.total_flips += u64::from(st.flips());
            if st.curr() != st.orig() {
                m.off_original += 1;
                if st.flips() > 0 {
                    m.wormholes += 1;
                }
            }
        }
        if m.stickers > 0 {
            m.entropy_pct =
                (100.0 * f64::from(m.off_original) / f64::from(m.stickers)).round() as u32;
        }
        m
    }

    /// `min(100, entropy_pct + 3 · wormholes)`.
    pub fn instability_score(&self) -> u32 {
        self.entropy_pct
            .saturating_add(self.wormholes.saturating_mul(3))
            .min(100)
    }

    /// The band [`instability_score`](Self::instability_score) falls in.
    pub fn instability(&self) -> Instability {
        Instability::from_score(self.instability_score())
    }
}

/// Instability band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Instability {
    /// Score below 25.
    Stable,
    /// Score 25 to 49.
    Unstable,
    /// Score 50 to 74.
    Critical,
    /// Score 75 and above.
    Chaos,
}

impl Instability {
    /// Band for a score in `0..=100`.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=24 => Self::Stable,
            25..=49 => Self::Unstable,
            50..=74 => Self::Critical,
            _ => Self::Chaos,
        }
    }
}

impl fmt::Display for Instability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stable => "STABLE",
            Self::Unstable => "UNSTABLE",
            Self::Critical => "CRITICAL",
            Self::Chaos => "CHAOS",
        };
        f.write_str(s)
    }
}
