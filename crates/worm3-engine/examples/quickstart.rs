//! WORM3 quickstart: a short session driven from the command line.
//!
//! Demonstrates:
//!   1. Building a WorldConfig and World
//!   2. Flipping antipodal pairs and twisting slices
//!   3. Letting chaos cascade over a few seconds of frames
//!   4. Playing a few worm moves with a queued twist
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use worm3_core::{Axis, Command, Face, Location, Turn, TurnSide};
use worm3_engine::{Event, World, WorldConfig};

// ─── Frame timing ───────────────────────────────────────────────

const FRAME_DT: f64 = 1.0 / 60.0;
const CHAOS_SECONDS: f64 = 5.0;
const WORM_SECONDS: f64 = 8.0;

fn run(world: World, command: Command) -> World {
    let t = world.apply(command.clone());
    if !t.receipt.accepted {
        println!("  {command:?} rejected: {:?}", t.receipt.reason);
    }
    for event in &t.events {
        println!("  {event:?}");
    }
    t.world
}

fn frames(mut world: World, seconds: f64) -> World {
    let mut elapsed = 0.0;
    while elapsed < seconds {
        let t = world.advance(FRAME_DT);
        for event in &t.events {
            match event {
                Event::Chaos(_) | Event::Worm(_) | Event::Rotated { .. } => {
                    println!("  t={elapsed:5.2}s {event:?}")
                }
                _ => {}
            }
        }
        world = t.world;
        elapsed += FRAME_DT;
    }
    world
}

fn report(world: &World) {
    let m = world.metrics();
    println!(
        "size {} | moves {} | flips {} | wormholes {} | entropy {}% | {} ({})",
        world.size(),
        world.moves(),
        m.total_flips,
        m.wormholes,
        m.entropy_pct,
        m.instability(),
        m.instability_score()
    );
}

fn main() {
    env_logger::init();

    let config = WorldConfig {
        seed: 42,
        ..WorldConfig::default()
    };
    let mut world = match World::new(config) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("invalid config: {e}");
            std::process::exit(1);
        }
    };

    println!("── Puzzle ──");
    world = run(
        world,
        Command::Flip {
            location: Location::new(2, 1, 2, Face::PZ),
        },
    );
    world = run(
        world,
        Command::RotateSlice {
            axis: Axis::Col,
            index: 2,
            turn: Turn::Positive,
        },
    );
    world = run(
        world,
        Command::Flip {
            location: Location::new(0, 0, 2, Face::PZ),
        },
    );
    report(&world);

    println!("── Chaos L3 for {CHAOS_SECONDS}s ──");
    world = run(world, Command::SetChaosLevel { level: 3 });
    world = frames(world, CHAOS_SECONDS);
    world = run(world, Command::SetChaosLevel { level: 0 });
    report(&world);

    println!("── Worm ──");
    world = run(world, Command::EnterWormMode);
    world = run(
        world,
        Command::TurnWorm {
            side: TurnSide::Right,
        },
    );
    world = run(
        world,
        Command::QueueRotation {
            axis: Axis::Row,
            turn: Turn::Negative,
        },
    );
    world = frames(world, WORM_SECONDS);
    if let Some(game) = world.worm() {
        println!(
            "worm {}: length {}, score {}, warps {}, final {}",
            game.state(),
            game.len(),
            game.score(),
            game.warps(),
            game.final_score()
        );
    }
    report(&world);
}
