//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input for [`World::new`](crate::World::new).
//! [`validate()`](WorldConfig::validate) checks every structural invariant
//! up front so a constructed world never has to fail later on its own
//! settings.

use std::error::Error;
use std::fmt;

use worm3_chaos::{ChaosLevel, DEFAULT_NEIGHBOUR_FACTOR};
use worm3_lattice::{MAX_SIZE, MIN_SIZE};
use worm3_worm::{WormConfig, WormConfigError, MIN_WORM_SIZE};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Cube size outside `MIN_SIZE..=MAX_SIZE`.
    InvalidSize {
        /// The configured size.
        size: u32,
    },
    /// Chaos level above 4.
    InvalidChaosLevel {
        /// The configured level.
        level: u8,
    },
    /// Chaos neighbour factor negative or not finite.
    InvalidNeighbourFactor {
        /// The configured factor.
        factor: f64,
    },
    /// Worm tuning failed validation.
    InvalidWorm(WormConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "cube size {size} outside {MIN_SIZE}..={MAX_SIZE}")
            }
            Self::InvalidChaosLevel { level } => {
                write!(f, "chaos level {level} above {}", ChaosLevel::MAX.get())
            }
            Self::InvalidNeighbourFactor { factor } => {
                write!(f, "chaos neighbour factor must be finite and >= 0, got {factor}")
            }
            Self::InvalidWorm(e) => write!(f, "worm: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidWorm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WormConfigError> for ConfigError {
    fn from(e: WormConfigError) -> Self {
        Self::InvalidWorm(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`World`](crate::World).
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Cube edge length. Default: 3.
    pub size: u32,
    /// Seed for the world's RNG (shuffles, chaos draws, orb placement).
    /// Default: 0.
    pub seed: u64,
    /// Initial chaos level, `0..=4`. Default: 0.
    pub chaos_level: u8,
    /// Scale on the base probability for each neighbour of a chaos source.
    /// Default: [`DEFAULT_NEIGHBOUR_FACTOR`].
    pub chaos_neighbour_factor: f64,
    /// Random twists applied by `Shuffle`. Default: 25.
    pub shuffle_moves: u32,
    /// Whether the host has already shown its first-flip hint. When
    /// `false`, the first accepted flip emits
    /// [`Event::FirstFlip`](crate::Event::FirstFlip). Default: false.
    pub first_flip_seen: bool,
    /// Worm game tuning.
    pub worm: WormConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 3,
            seed: 0,
            chaos_level: 0,
            chaos_neighbour_factor: DEFAULT_NEIGHBOUR_FACTOR,
            shuffle_moves: 25,
            first_flip_seen: false,
            worm: WormConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Size must be one the lattice supports.
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::InvalidSize { size: self.size });
        }
        // 2. Chaos level 0..=4.
        if ChaosLevel::new(self.chaos_level).is_none() {
            return Err(ConfigError::InvalidChaosLevel {
                level: self.chaos_level,
            });
        }
        // 3. Neighbour factor finite and non-negative.
        if !self.chaos_neighbour_factor.is_finite() || self.chaos_neighbour_factor < 0.0 {
            return Err(ConfigError::InvalidNeighbourFactor {
                factor: self.chaos_neighbour_factor,
            });
        }
        // 4. Worm tuning. Size-dependent checks only apply where worm mode
        //    can run at all; smaller cubes reject `EnterWormMode` instead.
        if self.size >= MIN_WORM_SIZE {
            self.worm.validate_for(self.size)?;
        } else {
            self.worm.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn size_out_of_range_fails() {
        for size in [0, 1, MAX_SIZE + 1] {
            let cfg = WorldConfig {
                size,
                ..WorldConfig::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::InvalidSize { size }));
        }
    }

    #[test]
    fn chaos_level_above_four_fails() {
        let cfg = WorldConfig {
            chaos_level: 5,
            ..WorldConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidChaosLevel { level: 5 })
        );
    }

    #[test]
    fn bad_neighbour_factor_fails() {
        for factor in [-0.1, f64::INFINITY] {
            let cfg = WorldConfig {
                chaos_neighbour_factor: factor,
                ..WorldConfig::default()
            };
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::InvalidNeighbourFactor { factor })
            );
        }
        let cfg = WorldConfig {
            chaos_neighbour_factor: f64::NAN,
            ..WorldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidNeighbourFactor { .. })
        ));
    }

    #[test]
    fn size_two_skips_worm_layout_check() {
        let cfg = WorldConfig {
            size: 2,
            ..WorldConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bad_worm_config_is_wrapped_with_source() {
        let cfg = WorldConfig {
            worm: WormConfig {
                initial_orbs: 0,
                ..WormConfig::default()
            },
            ..WorldConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err, ConfigError::InvalidWorm(WormConfigError::NoOrbs));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "worm: initial_orbs must be at least 1");
    }
}
