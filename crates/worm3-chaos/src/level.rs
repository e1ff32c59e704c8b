//! Chaos intensity levels.

use std::fmt;

/// How aggressively flips cascade. Level 0 disables chaos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChaosLevel(u8);

impl ChaosLevel {
    /// Chaos disabled.
    pub const OFF: ChaosLevel = ChaosLevel(0);

    /// Highest supported level.
    pub const MAX: ChaosLevel = ChaosLevel(4);

    /// `None` for levels above [`MAX`](Self::MAX).
    pub fn new(level: u8) -> Option<ChaosLevel> {
        (level <= Self::MAX.0).then_some(ChaosLevel(level))
    }

    /// Raw level, `0..=4`.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether chaos ticks should run at all.
    pub fn is_active(self) -> bool {
        self.0 > 0
    }

    /// Tick period in seconds, `None` when off.
    pub fn period(self) -> Option<f64> {
        match self.0 {
            1 => Some(1.0),
            2 => Some(0.75),
            3 => Some(0.5),
            4 => Some(0.35),
            _ => None,
        }
    }

    /// Base reflip probability.
    pub fn base_probability(self) -> f64 {
        match self.0 {
            1 => 0.10,
            2 => 0.20,
            3 => 0.35,
            4 => 0.50,
            _ => 0.0,
        }
    }
}

impl fmt::Display for ChaosLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}
