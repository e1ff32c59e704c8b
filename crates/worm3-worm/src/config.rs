//! Worm game tuning and its validation.

use std::error::Error;
use std::fmt;

/// Smallest cube the worm game runs on.
pub const MIN_WORM_SIZE: u32 = 3;

/// Tuning for one worm game.
#[derive(Clone, Debug, PartialEq)]
pub struct WormConfig {
    /// Orbs spawned at game start. Default: 15.
    pub initial_orbs: u32,
    /// Segments at game start, head included. Default: 3.
    pub initial_length: u32,
    /// Tiles per second before growth. Default: 0.8.
    pub base_speed: f64,
    /// Tiles per second added per segment. Default: 0.05.
    pub speed_increment: f64,
    /// Speed cap in tiles per second. Default: 3.0.
    pub max_speed: f64,
    /// Segments gained per orb. Default: 1.
    pub growth_per_orb: u32,
    /// Score for each antipodal warp. Default: 25.
    pub warp_bonus: u64,
    /// Flat score per orb. Default: 50.
    pub orb_base_score: u64,
    /// Score per segment of length at pickup. Default: 10.
    pub orb_length_score: u64,
    /// Pending slice twists allowed at once. Default: 2.
    pub rotation_queue_capacity: usize,
}

impl Default for WormConfig {
    fn default() -> Self {
        Self {
            initial_orbs: 15,
            initial_length: 3,
            base_speed: 0.8,
            speed_increment: 0.05,
            max_speed: 3.0,
            growth_per_orb: 1,
            warp_bonus: 25,
            orb_base_score: 50,
            orb_length_score: 10,
            rotation_queue_capacity: 2,
        }
    }
}

/// Errors detected by [`WormConfig::validate`] and at game start.
#[derive(Clone, Debug, PartialEq)]
pub enum WormConfigError {
    /// Cube too small for the worm game.
    UnsupportedSize {
        /// The cube size.
        size: u32,
    },
    /// Initial length is zero or too long to lay out on this cube.
    InvalidLength {
        /// The configured length.
        length: u32,
        /// Longest layout the cube allows, if known.
        max: Option<u32>,
    },
    /// Speed settings are not finite, not positive, or inconsistent.
    InvalidSpeed {
        /// Which invariant was violated.
        reason: String,
    },
    /// `initial_orbs` is zero.
    NoOrbs,
    /// `rotation_queue_capacity` is zero.
    QueueCapacityZero,
}

impl fmt::Display for WormConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize { size } => {
                write!(f, "worm mode needs size >= {MIN_WORM_SIZE}, got {size}")
            }
            Self::InvalidLength {
                length,
                max: Some(max),
            } => write!(f, "initial_length {length} outside 1..={max}"),
            Self::InvalidLength { length, max: None } => {
                write!(f, "initial_length must be at least 1, got {length}")
            }
            Self::InvalidSpeed { reason } => write!(f, "invalid speed: {reason}"),
            Self::NoOrbs => write!(f, "initial_orbs must be at least 1"),
            Self::QueueCapacityZero => write!(f, "rotation_queue_capacity must be at least 1"),
        }
    }
}

impl Error for WormConfigError {}

impl WormConfig {
    /// Check size-independent invariants.
    pub fn validate(&self) -> Result<(), WormConfigError> {
        if self.initial_length == 0 {
            return Err(WormConfigError::InvalidLength {
                length: 0,
                max: None,
            });
        }
        if !self.base_speed.is_finite() || self.base_speed <= 0.0 {
            return Err(WormConfigError::InvalidSpeed {
                reason: format!("base_speed must be finite and > 0, got {}", self.base_speed),
            });
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err(WormConfigError::InvalidSpeed {
                reason: format!(
                    "speed_increment must be finite and >= 0, got {}",
                    self.speed_increment
                ),
            });
        }
        if !self.max_speed.is_finite() || self.max_speed < self.base_speed {
            return Err(WormConfigError::InvalidSpeed {
                reason: format!(
                    "max_speed ({}) must be finite and >= base_speed ({})",
                    self.max_speed, self.base_speed
                ),
            });
        }
        if self.initial_orbs == 0 {
            return Err(WormConfigError::NoOrbs);
        }
        if self.rotation_queue_capacity == 0 {
            return Err(WormConfigError::QueueCapacityZero);
        }
        Ok(())
    }

    /// Check invariants that depend on the cube size.
    ///
    /// The initial body is laid straight back from the head around one
    /// ring of the cube, which holds `4·size` cells.
    pub fn validate_for(&self, size: u32) -> Result<(), WormConfigError> {
        if size < MIN_WORM_SIZE {
            return Err(WormConfigError::UnsupportedSize { size });
        }
        self.validate()?;
        let max = 4 * size;
        if self.initial_length > max {
            return Err(WormConfigError::InvalidLength {
                length: self.initial_length,
                max: Some(max),
            });
        }
        Ok(())
    }

    /// Tiles per second at `length`: `min(max_speed, base + inc·length)`.
    pub fn speed(&self, length: usize) -> f64 {
        (self.base_speed + self.speed_increment * length as f64).min(self.max_speed)
    }

    /// Seconds between moves at `length`.
    pub fn move_interval(&self, length: usize) -> f64 {
        1.0 / self.speed(length)
    }
}
