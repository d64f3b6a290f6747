//! Snapshot serialization tests

use wastedris::core::{GameSnapshot, GameState};
use wastedris::engine::journal::{Transition, TransitionEvent};

#[test]
fn test_snapshot_json_round_trip() {
    let mut game = GameState::new(77).with_gravity_period(1);
    for _ in 0..5 {
        game.base_tick();
    }
    game.apply_symbol('C');

    let snap = game.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn test_snapshot_json_field_names() {
    let mut game = GameState::new(1);
    game.abort();
    let value = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(value["status"], "stopped");
    assert_eq!(value["stop_cause"], "aborted");
    assert_eq!(value["clear_count"], 0);
    assert_eq!(value["seed"], 1);
    assert_eq!(value["board"].as_array().map(Vec::len), Some(13));
    assert_eq!(value["board"][0].as_array().map(Vec::len), Some(11));
    assert_eq!(value["active"]["x"], 3);
    assert_eq!(value["active"]["y"], -4);
}

#[test]
fn test_transition_json() {
    let game = GameState::new(2);
    let t = Transition {
        event: TransitionEvent::Symbol('z'),
        after: game.snapshot(),
    };
    let value = serde_json::to_value(t).unwrap();
    assert_eq!(value["event"]["symbol"], "z");

    let tick = serde_json::to_value(TransitionEvent::BaseTick).unwrap();
    assert_eq!(tick, "base_tick");
}
