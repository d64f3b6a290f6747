//! Transition journal for checking that concurrent runs are serializable.
//!
//! With recording on, every transition is appended under the session lock
//! together with the state it produced. Replaying the events one at a time
//! on a fresh state with the same seed must reproduce every recorded state.

use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, GameState};

/// What caused a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionEvent {
    /// An input symbol from the command thread
    Symbol(char),
    /// One base tick from the gravity thread
    BaseTick,
    /// Session teardown
    Teardown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub event: TransitionEvent,
    pub after: GameSnapshot,
}

/// Apply one event to a state
pub fn apply(state: &mut GameState, event: TransitionEvent) {
    match event {
        TransitionEvent::Symbol(symbol) => {
            state.apply_symbol(symbol);
        }
        TransitionEvent::BaseTick => {
            state.base_tick();
        }
        TransitionEvent::Teardown => state.abort(),
    }
}

/// Replay `transitions` serially on `reference`.
///
/// Returns the index of the first transition whose recorded state differs
/// from the replayed one, or `None` if the whole journal matches.
pub fn first_divergence(mut reference: GameState, transitions: &[Transition]) -> Option<usize> {
    transitions.iter().position(|t| {
        apply(&mut reference, t.event);
        reference.snapshot() != t.after
    })
}
