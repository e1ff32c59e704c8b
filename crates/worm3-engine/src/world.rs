//! The world: puzzle state, command handler and frame tick.
//!
//! [`World`] is a value. [`apply()`](World::apply) and
//! [`advance()`](World::advance) never mutate the receiver; they return a
//! [`Transition`] carrying the successor world, a [`Receipt`] and the
//! [`Event`]s the step produced. Cloning a world is cheap because the
//! lattice and manifold map are shared behind `Arc`s.
//!
//! # Snapshot discipline
//!
//! Every lattice replacement rebuilds the manifold map before the world is
//! handed back, so the map a caller sees always describes the lattice next
//! to it. Chaos and the worm read that map within the same frame.
//!
//! # Determinism
//!
//! All randomness (shuffles, chaos draws, orb placement) comes from one
//! `ChaCha8Rng` seeded from [`WorldConfig::seed`] and carried in the world.
//! The same seed, commands and frame times reproduce the same worlds.

use std::fmt;
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use worm3_chaos::{ChaosEvent, ChaosLevel, ChaosPropagator};
use worm3_core::{Axis, Command, Location, MoveCount, Receipt, Rejection, Turn};
use worm3_lattice::{flip, Lattice, LatticeError, LatticeMetrics, ManifoldMap};
use worm3_worm::{GameState, Heading, QueuedRotation, WormEvent, WormGame};

use crate::clock::LogicalClock;
use crate::config::{ConfigError, WorldConfig};
use crate::metrics::FrameMetrics;

// Compile-time assertion: World can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<World>();
    }
};

// ── Event ───────────────────────────────────────────────────────

/// Something a host may want to animate or announce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// A slice was twisted, by command or from the worm's queue.
    Rotated {
        /// Slice axis.
        axis: Axis,
        /// Slice index.
        index: i32,
        /// Direction.
        turn: Turn,
    },
    /// A sticker and its partner were flipped by command.
    Flipped {
        /// The slot the player chose.
        target: Location,
        /// Its partner, if resolved.
        partner: Option<Location>,
    },
    /// The first accepted flip since the host last saw one.
    FirstFlip,
    /// The lattice was replaced by a fresh scramble.
    Shuffled {
        /// Random twists applied.
        twists: u32,
    },
    /// The lattice was replaced by a solved one.
    Reset {
        /// New edge length.
        size: u32,
    },
    /// Chaos level changed.
    ChaosLevelChanged {
        /// New level.
        level: ChaosLevel,
    },
    /// One flip of a chaos cascade.
    Chaos(ChaosEvent),
    /// A worm game began.
    WormStarted {
        /// Orbs placed.
        orbs: usize,
    },
    /// Worm mode was left.
    WormEnded {
        /// Final score of the abandoned game.
        final_score: u64,
    },
    /// The worm game started over.
    WormRestarted {
        /// Orbs placed.
        orbs: usize,
    },
    /// The worm changed heading.
    WormTurned {
        /// New heading.
        heading: Heading,
    },
    /// The worm game was paused or resumed.
    PauseToggled {
        /// State after the toggle.
        state: GameState,
    },
    /// A twist joined the worm's rotation queue.
    RotationQueued(QueuedRotation),
    /// Worm movement, warps, orbs and game end.
    Worm(WormEvent),
}

// ── Transition ──────────────────────────────────────────────────

/// Result of [`World::apply`] or [`World::advance`].
#[derive(Clone, Debug)]
pub struct Transition {
    /// The successor world. Equal to the input when the receipt is a
    /// rejection.
    pub world: World,
    /// Whether the command (or frame) took effect.
    ///
    /// A receipt with `accepted == false` and no reason means an internal
    /// fault discarded the step; it is logged at error level.
    pub receipt: Receipt,
    /// Events in the order they happened.
    pub events: Vec<Event>,
    /// Work done by the frame. All zero for commands.
    pub metrics: FrameMetrics,
}

enum Failure {
    Rejected(Rejection),
    Fault(LatticeError),
}

impl From<Rejection> for Failure {
    fn from(r: Rejection) -> Self {
        Self::Rejected(r)
    }
}

impl From<LatticeError> for Failure {
    fn from(e: LatticeError) -> Self {
        match e.rejection() {
            Some(r) => Self::Rejected(r),
            None => Self::Fault(e),
        }
    }
}

// ── World ───────────────────────────────────────────────────────

/// The complete state of one puzzle session.
///
/// # Example
///
/// ```
/// use worm3_core::{Command, Face, Location};
/// use worm3_engine::{Event, World, WorldConfig};
///
/// let world = World::new(WorldConfig::default()).unwrap();
/// let t = world.apply(Command::Flip {
///     location: Location::new(2, 1, 2, Face::PZ),
/// });
/// assert!(t.receipt.accepted);
/// assert!(t.events.contains(&Event::FirstFlip));
/// assert_eq!(t.world.moves().0, 1);
/// ```
#[derive(Clone)]
pub struct World {
    config: WorldConfig,
    lattice: Lattice,
    map: Arc<ManifoldMap>,
    moves: MoveCount,
    chaos: ChaosPropagator,
    chaos_clock: LogicalClock,
    rng: ChaCha8Rng,
    worm: Option<WormGame>,
    worm_clock: LogicalClock,
    first_flip_seen: bool,
}

impl World {
    /// Create a world with a solved lattice from a validated config.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lattice = Lattice::new(config.size)
            .map_err(|_| ConfigError::InvalidSize { size: config.size })?;
        let chaos = chaos_propagator(&config, config.chaos_level).map_err(|e| {
            log::debug!("chaos propagator refused: {e}");
            ConfigError::InvalidChaosLevel {
                level: config.chaos_level,
            }
        })?;
        let map = Arc::new(ManifoldMap::build(&lattice));
        log::debug!(
            "world created: size {}, seed {}, chaos {}",
            config.size,
            config.seed,
            chaos.level()
        );
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            first_flip_seen: config.first_flip_seen,
            lattice,
            map,
            moves: MoveCount::default(),
            chaos,
            chaos_clock: LogicalClock::new(),
            worm: None,
            worm_clock: LogicalClock::new(),
            config,
        })
    }

    // ── Frame view ──────────────────────────────────────────────

    /// The configuration the world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Current edge length.
    pub fn size(&self) -> u32 {
        self.lattice.size()
    }

    /// The current lattice snapshot.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The manifold map of [`lattice()`](Self::lattice).
    pub fn map(&self) -> &Arc<ManifoldMap> {
        &self.map
    }

    /// Player moves since the last shuffle or reset.
    pub fn moves(&self) -> MoveCount {
        self.moves
    }

    /// Flip, wormhole and entropy counts for the current lattice.
    pub fn metrics(&self) -> LatticeMetrics {
        LatticeMetrics::measure(&self.lattice)
    }

    /// Current chaos level.
    pub fn chaos_level(&self) -> ChaosLevel {
        self.chaos.level()
    }

    /// The worm game, when worm mode is active.
    pub fn worm(&self) -> Option<&WormGame> {
        self.worm.as_ref()
    }

    /// Whether a flip has been seen, by this world or per the config.
    pub fn first_flip_seen(&self) -> bool {
        self.first_flip_seen
    }

    // ── Commands ────────────────────────────────────────────────

    /// Apply one command.
    ///
    /// Rejections return this world unchanged with the reason in the
    /// receipt. Nothing is partially applied.
    pub fn apply(&self, command: Command) -> Transition {
        let mut next = self.clone();
        let mut events = Vec::new();
        match next.handle(&command, &mut events) {
            Ok(()) => {
                if command.mutates_lattice() {
                    log::debug!(
                        "applied {command:?}: moves {}, snapshot {}",
                        next.moves,
                        next.lattice.id()
                    );
                } else {
                    log::debug!("applied {command:?}");
                }
                Transition {
                    world: next,
                    receipt: Receipt::accepted(),
                    events,
                    metrics: FrameMetrics::default(),
                }
            }
            Err(Failure::Rejected(reason)) => {
                log::debug!("rejected {command:?}: {reason}");
                self.unchanged(Receipt::rejected(reason))
            }
            Err(Failure::Fault(e)) => {
                log::error!("{command:?} discarded: {e}");
                self.unchanged(Receipt {
                    accepted: false,
                    reason: None,
                })
            }
        }
    }

    /// Advance the world by `dt` seconds of frame time.
    ///
    /// In order: one queued worm twist (while playing), the chaos tick if
    /// its clock fires, then one worm move if its clock fires. Each clock
    /// fires at most once per frame.
    pub fn advance(&self, dt: f64) -> Transition {
        let mut next = self.clone();
        let mut events = Vec::new();
        let mut metrics = FrameMetrics::default();
        match next.frame(dt, &mut events, &mut metrics) {
            Ok(()) => Transition {
                world: next,
                receipt: Receipt::accepted(),
                events,
                metrics,
            },
            Err(e) => {
                log::error!("frame discarded: {e}");
                let mut t = self.unchanged(Receipt {
                    accepted: false,
                    reason: None,
                });
                t.metrics.rolled_back = true;
                t
            }
        }
    }

    fn unchanged(&self, receipt: Receipt) -> Transition {
        Transition {
            world: self.clone(),
            receipt,
            events: Vec::new(),
            metrics: FrameMetrics::default(),
        }
    }

    fn handle(&mut self, command: &Command, events: &mut Vec<Event>) -> Result<(), Failure> {
        match *command {
            Command::RotateSlice { axis, index, turn } => {
                self.rotate(axis, index, turn)?;
                self.moves = self.moves.incremented();
                events.push(Event::Rotated { axis, index, turn });
            }
            Command::Flip { location } => {
                let out = flip(&self.lattice, &self.map, location)?;
                self.replace_lattice(out.lattice);
                self.moves = self.moves.incremented();
                events.push(Event::Flipped {
                    target: out.target,
                    partner: out.partner,
                });
                if !self.first_flip_seen {
                    self.first_flip_seen = true;
                    events.push(Event::FirstFlip);
                }
            }
            Command::Shuffle => {
                self.require_puzzle_mode()?;
                let lattice = self.shuffled(self.lattice.size())?;
                self.replace_lattice(lattice);
                self.moves = MoveCount::default();
                events.push(Event::Shuffled {
                    twists: self.config.shuffle_moves,
                });
            }
            Command::Reset { size } => {
                self.require_puzzle_mode()?;
                let lattice = Lattice::new(size)?;
                self.replace_lattice(lattice);
                self.moves = MoveCount::default();
                events.push(Event::Reset { size });
            }
            Command::SetChaosLevel { level } => {
                self.chaos = chaos_propagator(&self.config, level).map_err(|e| {
                    log::debug!("chaos propagator refused: {e}");
                    Rejection::InvalidChaosLevel { level }
                })?;
                self.chaos_clock.reset();
                events.push(Event::ChaosLevelChanged {
                    level: self.chaos.level(),
                });
            }
            Command::EnterWormMode => {
                if self.worm.is_some() {
                    return Err(Rejection::WormModeActive.into());
                }
                let size = self.lattice.size();
                let game = WormGame::new(self.config.worm.clone(), size, &mut self.rng)
                    .map_err(|e| {
                        log::debug!("worm mode unavailable: {e}");
                        Rejection::WormSizeUnsupported { size }
                    })?;
                events.push(Event::WormStarted {
                    orbs: game.orbs().len(),
                });
                self.worm = Some(game);
                self.worm_clock.reset();
            }
            Command::ExitWormMode => {
                let game = self.worm.take().ok_or(Rejection::WormModeInactive)?;
                log::info!("left worm mode, final score {}", game.final_score());
                events.push(Event::WormEnded {
                    final_score: game.final_score(),
                });
            }
            Command::QueueRotation { axis, turn } => {
                let queued = self.worm_mut()?.queue_rotation(axis, turn)?;
                events.push(Event::RotationQueued(queued));
            }
            Command::TurnWorm { side } => {
                let heading = self.worm_mut()?.turn(side)?;
                events.push(Event::WormTurned { heading });
            }
            Command::TogglePause => {
                let state = self.worm_mut()?.toggle_pause()?;
                events.push(Event::PauseToggled { state });
            }
            Command::Restart => {
                let game = self.worm.as_mut().ok_or(Rejection::WormModeInactive)?;
                game.restart(&mut self.rng);
                events.push(Event::WormRestarted {
                    orbs: game.orbs().len(),
                });
                self.worm_clock.reset();
            }
        }
        Ok(())
    }

    fn frame(
        &mut self,
        dt: f64,
        events: &mut Vec<Event>,
        metrics: &mut FrameMetrics,
    ) -> Result<(), LatticeError> {
        if let Some(r) = self.worm.as_mut().and_then(|g| g.next_rotation()) {
            self.rotate(r.axis, r.index, r.turn)?;
            metrics.rotations_applied += 1;
            events.push(Event::Rotated {
                axis: r.axis,
                index: r.index,
                turn: r.turn,
            });
        }

        if let Some(period) = self.chaos.level().period() {
            if self.chaos_clock.tick(dt, period) {
                metrics.chaos_fired = true;
                let out = self.chaos.step(&self.lattice, &self.map, &mut self.rng)?;
                if out.changed() {
                    metrics.chaos_flips = out.events.len() as u32;
                    self.lattice = out.lattice;
                    self.map = Arc::new(out.map);
                    events.extend(out.events.into_iter().map(Event::Chaos));
                }
            }
        }

        if let Some(game) = self.worm.as_mut() {
            if game.state() == GameState::Playing
                && self.worm_clock.tick(dt, game.move_interval())
            {
                let worm_events = game.step(&self.lattice, &self.map)?;
                metrics.worm_moves = worm_events
                    .iter()
                    .filter(|e| matches!(e, WormEvent::Moved { .. }))
                    .count() as u32;
                events.extend(worm_events.into_iter().map(Event::Worm));
            }
        }
        Ok(())
    }

    fn rotate(&mut self, axis: Axis, index: i32, turn: Turn) -> Result<(), LatticeError> {
        let lattice = self.lattice.rotate_slice(axis, index, turn)?;
        self.replace_lattice(lattice);
        if let Some(game) = self.worm.as_mut() {
            game.reproject(axis, index, turn);
        }
        Ok(())
    }

    fn replace_lattice(&mut self, lattice: Lattice) {
        self.map = Arc::new(ManifoldMap::build(&lattice));
        self.lattice = lattice;
    }

    fn shuffled(&mut self, size: u32) -> Result<Lattice, LatticeError> {
        let mut lattice = Lattice::new(size)?;
        for _ in 0..self.config.shuffle_moves {
            let axis = Axis::ALL[self.rng.random_range(0..Axis::ALL.len())];
            let index = self.rng.random_range(0..size as i32);
            let turn = if self.rng.random_bool(0.5) {
                Turn::Positive
            } else {
                Turn::Negative
            };
            lattice = lattice.rotate_slice(axis, index, turn)?;
        }
        Ok(lattice)
    }

    fn require_puzzle_mode(&self) -> Result<(), Rejection> {
        match self.worm {
            Some(_) => Err(Rejection::WormModeActive),
            None => Ok(()),
        }
    }

    fn worm_mut(&mut self) -> Result<&mut WormGame, Rejection> {
        self.worm.as_mut().ok_or(Rejection::WormModeInactive)
    }
}

fn chaos_propagator(config: &WorldConfig, level: u8) -> Result<ChaosPropagator, String> {
    ChaosPropagator::builder()
        .level(level)
        .neighbour_factor(config.chaos_neighbour_factor)
        .build()
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("size", &self.lattice.size())
            .field("snapshot", &self.lattice.id())
            .field("moves", &self.moves)
            .field("chaos", &self.chaos.level())
            .field("worm", &self.worm.as_ref().map(WormGame::state))
            .field("first_flip_seen", &self.first_flip_seen)
            .finish()
    }
}
