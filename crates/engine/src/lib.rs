//! Concurrent session engine
//!
//! Wraps the single-threaded [`GameState`](wastedris_core::GameState) in a
//! [`Session`]: a gravity thread driven by a [`Ticker`] and a command side
//! fed through [`Session::submit`] (or [`drive`] with an [`InputSource`]).
//! Every transition is serialized by one lock, and frames reach the
//! [`Renderer`] in the same order.

pub mod engine;
pub mod error;
pub mod input;
pub mod journal;
pub mod render;
pub mod session;
pub mod ticker;

pub use wastedris_core as core;
pub use wastedris_types as types;

pub use engine::Engine;
pub use error::EngineError;
pub use input::{drive, InputSource, ScriptedInput};
pub use journal::{Transition, TransitionEvent};
pub use render::{NullRenderer, RecordingRenderer, Renderer};
pub use session::{Session, SessionOptions};
pub use ticker::{ManualClock, ManualTicker, SleepTicker, Ticker};

use std::sync::{Mutex, MutexGuard};

/// Lock, recovering the data if a previous holder panicked.
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("recovering poisoned lock");
        poisoned.into_inner()
    })
}
