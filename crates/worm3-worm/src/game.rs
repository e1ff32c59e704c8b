//! The worm game state machine.
//!
//! [`WormGame`] owns the worm's body, heading, orbs and score. It reads the
//! lattice (to detect flipped stickers and resolve antipodal partners) but
//! never mutates it; slice twists requested through the rotation queue are
//! applied by the caller, which then calls [`WormGame::reproject`] so the
//! worm and orbs ride the twisted slice.

use crate::config::{WormConfig, WormConfigError};
use crate::orbs::spawn_orbs;
use crate::surface::{next_surface_position, Heading};
use indexmap::IndexSet;
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;
use worm3_core::{Axis, Face, Location, Rejection, Turn, TurnSide};
use worm3_lattice::{reproject, Lattice, LatticeError, ManifoldMap, Sticker};

/// Lifecycle of a worm game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The worm moves on its clock.
    Playing,
    /// Frozen until unpaused.
    Paused,
    /// Collided or left the surface. Only a restart leaves this state.
    GameOver,
    /// Every orb eaten. Only a restart leaves this state.
    Victory,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::Playing => "playing",
            GameState::Paused => "paused",
            GameState::GameOver => "game over",
            GameState::Victory => "victory",
        };
        f.write_str(s)
    }
}

/// One body cell. Index 0 of [`WormGame::segments`] is the head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Surface slot occupied.
    pub location: Location,
    /// Direction of travel when the segment was laid.
    pub heading: Heading,
}

/// A slice twist waiting in the rotation queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueuedRotation {
    /// Slice axis.
    pub axis: Axis,
    /// Slice index, taken from the head when queued.
    pub index: i32,
    /// Twist direction.
    pub turn: Turn,
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathCause {
    /// The head was not on a valid surface slot.
    OffSurface,
    /// The head ran into the body.
    SelfCollision,
}

/// Something that happened during a worm step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WormEvent {
    /// The head advanced.
    Moved {
        /// New head slot.
        head: Location,
        /// Heading after the move.
        heading: Heading,
    },
    /// The head landed on a flipped sticker and continued from its partner.
    Warped {
        /// The flipped slot.
        from: Location,
        /// Its antipodal partner.
        to: Location,
    },
    /// An orb was eaten.
    OrbEaten {
        /// Where.
        at: Location,
        /// Orbs left.
        remaining: usize,
    },
    /// The game ended in defeat.
    GameOver {
        /// Why.
        cause: DeathCause,
        /// The slot the head failed to enter (or stood on).
        at: Location,
    },
    /// The last orb was eaten.
    Victory,
}

/// A worm game on one cube.
#[derive(Clone, Debug)]
pub struct WormGame {
    config: WormConfig,
    size: u32,
    state: GameState,
    segments: VecDeque<Segment>,
    heading: Heading,
    orbs: IndexSet<Location>,
    score: u64,
    warps: u32,
    orbs_eaten: u32,
    pending_growth: u32,
    rotations: VecDeque<QueuedRotation>,
}

impl WormGame {
    /// Start a game on a `size`-cube.
    ///
    /// The worm starts at the center of the front face heading up, its body
    /// trailing straight back down the surface. The body follows the
    /// surface, so on small cubes its tail wraps past the front face's
    /// bottom edge: on a 3-cube the third segment sits at `(1, 0, 2)` on
    /// `NY`. Orbs are placed on free cells by `rng`.
    pub fn new<R: Rng + ?Sized>(
        config: WormConfig,
        size: u32,
        rng: &mut R,
    ) -> Result<Self, WormConfigError> {
        config.validate_for(size)?;
        let mut game = Self {
            config,
            size,
            state: GameState::Playing,
            segments: VecDeque::new(),
            heading: Heading::Up,
            orbs: IndexSet::new(),
            score: 0,
            warps: 0,
            orbs_eaten: 0,
            pending_growth: 0,
            rotations: VecDeque::new(),
        };
        game.reset(rng);
        Ok(game)
    }

    fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.segments = initial_segments(self.size, self.config.initial_length);
        self.heading = Heading::Up;
        let occupied: Vec<Location> = self.segments.iter().map(|s| s.location).collect();
        self.orbs = spawn_orbs(
            self.size,
            self.config.initial_orbs as usize,
            &occupied,
            rng,
        );
        self.state = GameState::Playing;
        self.score = 0;
        self.warps = 0;
        self.orbs_eaten = 0;
        self.pending_growth = 0;
        self.rotations.clear();
    }

    /// Start over with a fresh worm and fresh orbs.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset(rng);
        log::info!("worm game restarted with {} orbs", self.orbs.len());
    }

    /// Tuning in effect.
    pub fn config(&self) -> &WormConfig {
        &self.config
    }

    /// Cube size the game runs on.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Body, head first.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a worm has at least its head.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The head segment.
    pub fn head(&self) -> Option<&Segment> {
        self.segments.front()
    }

    /// Current direction of travel.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Uneaten orbs.
    pub fn orbs(&self) -> &IndexSet<Location> {
        &self.orbs
    }

    /// Running score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Antipodal warps taken.
    pub fn warps(&self) -> u32 {
        self.warps
    }

    /// Orbs eaten.
    pub fn orbs_eaten(&self) -> u32 {
        self.orbs_eaten
    }

    /// Growth not yet realized.
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Twists waiting to be applied.
    pub fn pending_rotations(&self) -> impl ExactSizeIterator<Item = &QueuedRotation> + '_ {
        self.rotations.iter()
    }

    /// Tiles per second at the current length.
    pub fn speed(&self) -> f64 {
        self.config.speed(self.len())
    }

    /// Seconds between moves at the current length.
    pub fn move_interval(&self) -> f64 {
        self.config.move_interval(self.len())
    }

    /// End-of-game score: `100·length + 50·orbs_eaten + 25·warps`.
    pub fn final_score(&self) -> u64 {
        100 * self.len() as u64 + 50 * u64::from(self.orbs_eaten) + 25 * u64::from(self.warps)
    }

    fn require_playing(&self) -> Result<(), Rejection> {
        if self.state == GameState::Playing {
            Ok(())
        } else {
            Err(Rejection::WormNotPlaying)
        }
    }

    /// Steer. Only while playing.
    pub fn turn(&mut self, side: TurnSide) -> Result<Heading, Rejection> {
        self.require_playing()?;
        self.heading = self.heading.turned(side);
        Ok(self.heading)
    }

    /// Switch between playing and paused. Rejected once the game has ended.
    pub fn toggle_pause(&mut self) -> Result<GameState, Rejection> {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            GameState::GameOver | GameState::Victory => return Err(Rejection::WormNotPlaying),
        };
        log::info!("worm game {}", self.state);
        Ok(self.state)
    }

    /// Queue a twist of the `axis` slice under the head.
    pub fn queue_rotation(&mut self, axis: Axis, turn: Turn) -> Result<QueuedRotation, Rejection> {
        self.require_playing()?;
        if self.rotations.len() >= self.config.rotation_queue_capacity {
            return Err(Rejection::RotationQueueFull);
        }
        let head = self.head().ok_or(Rejection::WormNotPlaying)?;
        let rotation = QueuedRotation {
            axis,
            index: head.location.pos.component(axis),
            turn,
        };
        self.rotations.push_back(rotation);
        Ok(rotation)
    }

    /// Take the next queued twist. Nothing is released unless playing.
    pub fn next_rotation(&mut self) -> Option<QueuedRotation> {
        if self.state != GameState::Playing {
            return None;
        }
        self.rotations.pop_front()
    }

    /// Carry the worm and orbs along with a twist of slice `index` of
    /// `axis`, using the same transform the lattice applies.
    pub fn reproject(&mut self, axis: Axis, index: i32, turn: Turn) {
        let size = self.size;
        if let Some(head) = self.segments.front() {
            if head.location.pos.component(axis) == index {
                self.heading = self.heading.reprojected(head.location.face, axis, turn);
            }
        }
        for seg in self.segments.iter_mut() {
            if seg.location.pos.component(axis) == index {
                seg.heading = seg.heading.reprojected(seg.location.face, axis, turn);
                seg.location = reproject(seg.location, axis, index, turn, size);
            }
        }
        self.orbs = self
            .orbs
            .iter()
            .map(|orb| reproject(*orb, axis, index, turn, size))
            .collect();
    }

    fn end(&mut self, state: GameState) {
        self.state = state;
        log::info!(
            "worm game {state}: length {}, score {}, final {}",
            self.len(),
            self.score,
            self.final_score()
        );
    }

    /// Advance the worm one cell.
    ///
    /// Does nothing unless playing. `map` must describe `lattice`; the only
    /// error is a stale map.
    pub fn step(
        &mut self,
        lattice: &Lattice,
        map: &ManifoldMap,
    ) -> Result<Vec<WormEvent>, LatticeError> {
        let mut events = Vec::new();
        if self.state != GameState::Playing {
            return Ok(events);
        }
        map.ensure_current(lattice)?;
        let Some(head) = self.segments.front().map(|s| s.location) else {
            return Ok(events);
        };

        let Some((next, heading)) = next_surface_position(head, self.heading, self.size) else {
            self.end(GameState::GameOver);
            events.push(WormEvent::GameOver {
                cause: DeathCause::OffSurface,
                at: head,
            });
            return Ok(events);
        };
        self.heading = heading;

        let mut target = next;
        if lattice.sticker(next).is_some_and(Sticker::is_flipped) {
            if let Some(partner) = map.antipode_of(lattice, next)? {
                log::debug!("worm warped {next} -> {partner}");
                events.push(WormEvent::Warped {
                    from: next,
                    to: partner,
                });
                target = partner;
                self.warps += 1;
                self.score += self.config.warp_bonus;
            }
        }

        // The tail cell frees up this step unless the worm is growing.
        let body = if self.pending_growth == 0 {
            self.segments.len().saturating_sub(1)
        } else {
            self.segments.len()
        };
        if self.segments.iter().take(body).any(|s| s.location == target) {
            self.end(GameState::GameOver);
            events.push(WormEvent::GameOver {
                cause: DeathCause::SelfCollision,
                at: target,
            });
            return Ok(events);
        }

        let ate = self.orbs.shift_remove(&target);
        if ate {
            self.score += self.config.orb_base_score
                + self.config.orb_length_score * self.segments.len() as u64;
            self.orbs_eaten += 1;
            self.pending_growth += self.config.growth_per_orb;
            events.push(WormEvent::OrbEaten {
                at: target,
                remaining: self.orbs.len(),
            });
        }

        self.segments.push_front(Segment {
            location: target,
            heading: self.heading,
        });
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.segments.pop_back();
        }
        events.push(WormEvent::Moved {
            head: target,
            heading: self.heading,
        });

        if ate && self.orbs.is_empty() {
            self.end(GameState::Victory);
            events.push(WormEvent::Victory);
        }
        Ok(events)
    }
}

/// Head at the center of the front face heading up, body laid straight
/// back down the surface.
fn initial_segments(size: u32, length: u32) -> VecDeque<Segment> {
    let c = (size / 2) as i32;
    let head = Location::new(c, c, size as i32 - 1, Face::PZ);
    let mut segments = VecDeque::with_capacity(length as usize);
    segments.push_back(Segment {
        location: head,
        heading: Heading::Up,
    });
    let mut cur = head;
    let mut back = Heading::Down;
    for _ in 1..length {
        let Some((loc, h)) = next_surface_position(cur, back, size) else {
            break;
        };
        segments.push_back(Segment {
            location: loc,
            heading: h.reversed(),
        });
        cur = loc;
        back = h;
    }
    segments
}
