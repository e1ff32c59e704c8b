//! Integration test: manifold map freshness.
//!
//! A map built before a twist describes stickers that have since moved.
//! The lattice layer refuses such a map outright; the world never hands
//! one out, whatever sequence of commands and frames it is driven with.

use proptest::prelude::*;
use worm3_core::{Axis, Command, Face, Location, Turn};
use worm3_engine::{World, WorldConfig};
use worm3_lattice::{flip, LatticeError};

#[test]
fn map_from_before_a_twist_is_refused() {
    let world = World::new(WorldConfig::default()).unwrap();
    let old_map = world.map().clone();
    let twisted = world
        .apply(Command::RotateSlice {
            axis: Axis::Row,
            index: 2,
            turn: Turn::Positive,
        })
        .world;

    let err = flip(
        twisted.lattice(),
        &old_map,
        Location::new(2, 2, 2, Face::PY),
    )
    .unwrap_err();
    assert!(matches!(err, LatticeError::StaleManifold { .. }));

    // The world's own map is current and works.
    assert!(flip(
        twisted.lattice(),
        twisted.map(),
        Location::new(2, 2, 2, Face::PY)
    )
    .is_ok());
}

#[test]
fn rejected_command_keeps_snapshot_and_map() {
    let world = World::new(WorldConfig::default()).unwrap();
    let t = world.apply(Command::RotateSlice {
        axis: Axis::Col,
        index: -1,
        turn: Turn::Negative,
    });
    assert!(!t.receipt.accepted);
    assert_eq!(t.world.lattice().id(), world.lattice().id());
    assert_eq!(t.world.map().built_from(), world.map().built_from());
}

// ── Random sessions ──────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Input {
    Command(Command),
    Advance(f64),
}

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Col), Just(Axis::Row), Just(Axis::Depth)]
}

fn arb_turn() -> impl Strategy<Value = Turn> {
    prop_oneof![Just(Turn::Positive), Just(Turn::Negative)]
}

fn arb_face() -> impl Strategy<Value = Face> {
    prop::sample::select(Face::ALL.to_vec())
}

fn arb_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        3 => (arb_axis(), -1i32..5, arb_turn())
            .prop_map(|(axis, index, turn)| Input::Command(Command::RotateSlice { axis, index, turn })),
        3 => (0i32..4, 0i32..4, 0i32..4, arb_face()).prop_map(|(x, y, z, face)| {
            Input::Command(Command::Flip {
                location: Location::new(x, y, z, face),
            })
        }),
        1 => (0u8..6).prop_map(|level| Input::Command(Command::SetChaosLevel { level })),
        1 => Just(Input::Command(Command::EnterWormMode)),
        1 => (arb_axis(), arb_turn())
            .prop_map(|(axis, turn)| Input::Command(Command::QueueRotation { axis, turn })),
        4 => (0.0f64..1.5).prop_map(Input::Advance),
    ]
}

proptest! {
    #[test]
    fn world_map_always_describes_world_lattice(
        seed in any::<u64>(),
        inputs in prop::collection::vec(arb_input(), 1..60),
    ) {
        let mut world = World::new(WorldConfig { seed, ..WorldConfig::default() }).unwrap();
        for input in inputs {
            let t = match input {
                Input::Command(cmd) => world.apply(cmd),
                Input::Advance(dt) => world.advance(dt),
            };
            // Internal faults are the only way to lose a step without a reason.
            prop_assert!(t.receipt.accepted || t.receipt.reason.is_some());
            prop_assert!(!t.metrics.rolled_back);
            world = t.world;

            let size = world.size();
            prop_assert!(world.map().is_current_for(world.lattice()));
            prop_assert_eq!(world.map().len(), (6 * size * size) as usize);
            prop_assert_eq!(world.lattice().sticker_count(), (6 * size * size) as usize);
            // Every flip, by command or cascade, moves a pair.
            prop_assert_eq!(world.metrics().total_flips % 2, 0);
        }
    }
}
