//! Commands accepted by the world and the receipts returned for them.

use crate::error::Rejection;
use crate::geometry::{Axis, Location, Turn};

/// Side for a worm turn, relative to its current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnSide {
    /// Counter-clockwise (Up → Left).
    Left,
    /// Clockwise (Up → Right).
    Right,
}

/// A command submitted to the world.
///
/// Puzzle commands act on the lattice directly; worm commands act on the
/// worm game and are rejected when worm mode is not active.
///
/// # Examples
///
/// ```
/// use worm3_core::{Axis, Command, Face, Location, Turn};
///
/// let twist = Command::RotateSlice {
///     axis: Axis::Col,
///     index: 0,
///     turn: Turn::Positive,
/// };
/// let flip = Command::Flip {
///     location: Location::new(2, 1, 2, Face::PZ),
/// };
///
/// assert!(twist.mutates_lattice());
/// assert!(flip.mutates_lattice());
/// assert!(!Command::TogglePause.mutates_lattice());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    // --- Puzzle ---
    /// Twist one slice by a quarter turn.
    RotateSlice {
        /// Slice axis.
        axis: Axis,
        /// Slice coordinate along `axis`. Out-of-range values are rejected.
        index: i32,
        /// Turn direction.
        turn: Turn,
    },
    /// Flip the sticker at `location` and its antipodal partner.
    Flip {
        /// Sticker slot to flip.
        location: Location,
    },
    /// Replace the lattice with a fresh one scrambled by random twists.
    Shuffle,
    /// Replace the lattice with a fresh, solved one of the given size.
    Reset {
        /// New edge length.
        size: u32,
    },
    /// Set the chaos level, `0` (off) through `4`.
    SetChaosLevel {
        /// Requested level.
        level: u8,
    },

    // --- Mode ---
    /// Start a worm game on the current lattice.
    EnterWormMode,
    /// Leave worm mode, discarding the game.
    ExitWormMode,

    // --- Worm ---
    /// Queue a twist of the slice under the worm's head.
    QueueRotation {
        /// Slice axis; the index is taken from the head position.
        axis: Axis,
        /// Turn direction.
        turn: Turn,
    },
    /// Turn the worm's heading.
    TurnWorm {
        /// Which way to turn.
        side: TurnSide,
    },
    /// Toggle between playing and paused.
    TogglePause,
    /// Start a fresh worm game.
    Restart,
}

impl Command {
    /// Whether applying this command may replace the lattice snapshot.
    pub fn mutates_lattice(&self) -> bool {
        matches!(
            self,
            Command::RotateSlice { .. }
                | Command::Flip { .. }
                | Command::Shuffle
                | Command::Reset { .. }
        )
    }
}

/// Receipt returned for each applied command.
///
/// A rejected command leaves the world unchanged; `reason` says why.
///
/// # Examples
///
/// ```
/// use worm3_core::{Receipt, Rejection};
///
/// let ok = Receipt::accepted();
/// assert!(ok.accepted);
///
/// let no = Receipt::rejected(Rejection::WormModeInactive);
/// assert!(!no.accepted);
/// assert_eq!(no.reason, Some(Rejection::WormModeInactive));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Whether the command took effect.
    pub accepted: bool,
    /// The reason the command was rejected, if applicable.
    pub reason: Option<Rejection>,
}

impl Receipt {
    /// An accepted receipt.
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            reason: None,
        }
    }

    /// A rejected receipt with the given reason.
    pub fn rejected(reason: Rejection) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Face;

    #[test]
    fn worm_commands_do_not_touch_the_lattice_directly() {
        let cmds = [
            Command::QueueRotation {
                axis: Axis::Row,
                turn: Turn::Negative,
            },
            Command::TurnWorm {
                side: TurnSide::Left,
            },
            Command::TogglePause,
            Command::Restart,
        ];
        for cmd in cmds {
            assert!(!cmd.mutates_lattice());
        }
    }

    #[test]
    fn puzzle_commands_replace_the_lattice() {
        let cmds = [
            Command::Flip {
                location: Location::new(0, 0, 0, Face::NX),
            },
            Command::Shuffle,
            Command::Reset { size: 4 },
        ];
        for cmd in cmds {
            assert!(cmd.mutates_lattice());
        }
        assert!(!Command::SetChaosLevel { level: 2 }.mutates_lattice());
        assert!(!Command::EnterWormMode.mutates_lattice());
    }
}
